extern crate reqwest;
extern crate serde;

use super::{
    error::{network_error, Error, Kind, Operate, Result},
    Identified, Payload, Receipt, Session,
};
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
struct Body<'a> {
    problem_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    sequence: Option<i64>,
    #[serde(flatten)]
    payload: &'a Payload,
}

pub(super) fn solution_url(solution_url: &str, problem_id: i64) -> String {
    format!("{}/problem/{}/solution", solution_url, problem_id)
}

impl Session {
    pub(super) async fn write_solution(
        &self,
        operate: Operate,
        problem_id: i64,
        sequence: Option<i64>,
        payload: &Payload,
    ) -> Result<Receipt> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| Error::new(operate, Kind::Unauthenticated))?;
        let method = match sequence {
            Some(_) => Method::PUT,
            None => Method::POST,
        };
        let err = network_error(operate);
        let response = self
            .client
            .request(method.clone(), solution_url(&self.solution_url, problem_id))
            .bearer_auth(token)
            .json(&Body {
                problem_id,
                sequence,
                payload,
            })
            .send()
            .await
            .map_err(&err)?
            .error_for_status()
            .map_err(&err)?;
        let status = response.status();
        let url = response.url().to_string();
        let id = response.json::<Identified>().await.map_err(&err)?.id;
        Ok(Receipt {
            method,
            url,
            status,
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{client::Api, config::Config};
    use serde_json::json;

    fn payload() -> Payload {
        Payload {
            language: "Python".to_string(),
            author: "tony9402".to_string(),
            description: "```python\nprint(1)\n\n```\n\n".to_string(),
        }
    }

    #[test]
    fn create_body() {
        let payload = payload();
        let body = serde_json::to_value(&Body {
            problem_id: 12,
            sequence: None,
            payload: &payload,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "problem_id": 12,
                "language": "Python",
                "author": "tony9402",
                "description": "```python\nprint(1)\n\n```\n\n",
            })
        );
    }

    #[test]
    fn update_body_carries_sequence() {
        let payload = payload();
        let body = serde_json::to_value(&Body {
            problem_id: 12,
            sequence: Some(5),
            payload: &payload,
        })
        .unwrap();
        assert_eq!(body["sequence"], json!(5));
        assert_eq!(body["problem_id"], json!(12));
    }

    #[test]
    fn url() {
        assert_eq!(
            solution_url("https://api.example.com", 7),
            "https://api.example.com/problem/7/solution"
        );
    }

    #[tokio::test]
    async fn write_requires_login() {
        let session = Session::new(&Config {
            auth_url: "http://127.0.0.1:9".to_string(),
            solution_url: "http://127.0.0.1:9".to_string(),
            email: "a".to_string(),
            password: "b".to_string(),
            solution_root: "solutions".into(),
            cache_path: "solution_data.yaml".into(),
        })
        .unwrap();
        let err = session.create_solution(1, &payload()).await.unwrap_err();
        assert_eq!(err.operate(), Operate::CreateSolution);
        assert!(matches!(err.kind(), Kind::Unauthenticated));
    }
}
