/// The remote peer a command line came from. `number` is the transport's
/// session-local handle; `public_key` is the stable hex identity the
/// master-key list matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerId {
    pub number: i64,
    pub public_key: String,
}

impl CallerId {
    pub fn new(number: i64, public_key: impl Into<String>) -> Self {
        Self {
            number,
            public_key: public_key.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessageIn {
    pub caller: CallerId,
    pub text: String,
}

impl MessageIn {
    pub fn new(caller: CallerId, text: impl Into<String>) -> Self {
        Self {
            caller,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessageOut {
    pub caller: CallerId,
    pub text: String,
}

impl MessageOut {
    pub fn text(caller: CallerId, text: impl Into<String>) -> Self {
        Self {
            caller,
            text: text.into(),
        }
    }
}
