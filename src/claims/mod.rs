mod rfc7519;
pub use rfc7519::{
    Aud,
    Exp,
    Iat,
    Iss,
    Jti,
    Nbf,
    Sub,
};
mod payload;
pub use payload::Payload;
