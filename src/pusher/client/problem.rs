extern crate log;

use super::{
    error::{network_error, Operate, Result},
    Identified, Session,
};
use log::debug;

pub(super) fn lookup_url(solution_url: &str) -> String {
    format!("{}/problem/problem-id", solution_url)
}

impl Session {
    pub async fn problem_id(&self, judge: &str, problem_number: &str) -> Result<i64> {
        let err = network_error(Operate::LookupProblem);
        let id = self
            .client
            .get(lookup_url(&self.solution_url))
            .query(&[("oj_name", judge), ("problem_number", problem_number)])
            .send()
            .await
            .map_err(&err)?
            .error_for_status()
            .map_err(&err)?
            .json::<Identified>()
            .await
            .map_err(&err)?
            .id;
        debug!("Problem {} {} is #{}", judge, problem_number, id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url() {
        assert_eq!(
            lookup_url("https://api.example.com"),
            "https://api.example.com/problem/problem-id"
        );
    }
}
