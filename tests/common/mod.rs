pub use ::aw::{
    test,
    web::{self, Data, Json, Query},
    Responder,
};

pub use ::serde::{Deserialize, Serialize};

pub mod tapi;

#[allow(unused)]
pub const TEST_URL_GET_CLASSROOM: &str = "/test/get-classroom";
