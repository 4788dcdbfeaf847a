//! Success envelope. Most JSON bodies are wrapped as `{ "data": ... }`; the
//! auth token pair, the step progress result and `/health` are returned bare.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
