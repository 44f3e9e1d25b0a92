use crate::data::money::Money;
use snafu::Snafu;
use std::str::ParseBoolError;

pub type SmsResult<T> = Result<T, SmsError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SmsError {
    #[snafu(display("Error reading a line of input"))]
    ReadLine { source: std::io::Error },
    #[snafu(display("Error writing output"))]
    WriteOutput { source: std::io::Error },
    #[snafu(display("Error flushing output"))]
    FlushOutput { source: std::io::Error },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse env var `{}` as a boolean", name))]
    ParseBool {
        source: ParseBoolError,
        name: &'static str,
    },
    #[snafu(display("Invalid payment amount {:?}. Please enter a number.", original))]
    InvalidPaymentAmount { original: String },
    #[snafu(display("A payment of {} would put the balance out of range.", amount))]
    PaymentOutOfRange { amount: Money },
}
