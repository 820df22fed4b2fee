//! Registration form messages

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// Submit requested with the raw phone field value
    Submit { phone_raw: String },
}
