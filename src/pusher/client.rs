extern crate reqwest;
extern crate serde;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

pub mod error;
mod problem;
mod session;
mod solution;

pub use error::{Error, Kind, Operate, Result};
pub use session::Session;

/// Fields shared by solution create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub language: String,
    pub author: String,
    pub description: String,
}

/// What the tracker answered to a solution write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub method: Method,
    pub url: String,
    pub status: StatusCode,
    pub id: i64,
}

#[derive(Deserialize)]
struct Identified {
    id: i64,
}

/// Remote solution tracker operations used by the sync pass.
#[allow(async_fn_in_trait)]
pub trait Api {
    async fn lookup_problem_id(&self, judge: &str, problem_number: &str) -> Result<i64>;
    async fn create_solution(&self, problem_id: i64, payload: &Payload) -> Result<Receipt>;
    async fn update_solution(
        &self,
        problem_id: i64,
        sequence: i64,
        payload: &Payload,
    ) -> Result<Receipt>;
}

impl Api for Session {
    async fn lookup_problem_id(&self, judge: &str, problem_number: &str) -> Result<i64> {
        self.problem_id(judge, problem_number).await
    }
    async fn create_solution(&self, problem_id: i64, payload: &Payload) -> Result<Receipt> {
        self.write_solution(Operate::CreateSolution, problem_id, None, payload)
            .await
    }
    async fn update_solution(
        &self,
        problem_id: i64,
        sequence: i64,
        payload: &Payload,
    ) -> Result<Receipt> {
        self.write_solution(Operate::UpdateSolution, problem_id, Some(sequence), payload)
            .await
    }
}
