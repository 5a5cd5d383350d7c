//! Inbound ports (driving side): interfaces the front end hands to forms.

pub mod view;
