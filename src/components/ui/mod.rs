mod alert;
mod button;
mod field_error;
mod social_buttons;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use field_error::FieldError;
pub(crate) use social_buttons::SocialButtons;
pub(crate) use spinner::Spinner;
