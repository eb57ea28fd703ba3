#[derive(Debug, Fail, PartialEq, Eq)]
pub enum EulerError {
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),

    #[fail(display = "wrong answer: expected {}, got {}", expected, actual)]
    WrongAnswer { expected: String, actual: String },
}
