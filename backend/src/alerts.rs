//! Alert headers attached to data pool responses.
//!
//! Clients read `X-dataPoolGeneratorApp-alert` (or `-error`) as a translation
//! key and `X-dataPoolGeneratorApp-params` as its argument.

use actix_web::HttpResponseBuilder;

const APPLICATION_NAME: &str = "dataPoolGeneratorApp";
pub const ENTITY_NAME: &str = "dataPool";

pub const ALERT_HEADER: &str = "X-dataPoolGeneratorApp-alert";
pub const ERROR_HEADER: &str = "X-dataPoolGeneratorApp-error";
pub const PARAMS_HEADER: &str = "X-dataPoolGeneratorApp-params";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    header: &'static str,
    message: String,
    param: String,
}

impl Alert {
    pub fn created(id: &str) -> Self {
        Self::entity("created", id)
    }

    pub fn updated(id: &str) -> Self {
        Self::entity("updated", id)
    }

    pub fn deleted(id: &str) -> Self {
        Self::entity("deleted", id)
    }

    pub fn failure(error_key: &str) -> Self {
        Alert {
            header: ERROR_HEADER,
            message: format!("error.{}", error_key),
            param: ENTITY_NAME.to_string(),
        }
    }

    fn entity(action: &str, id: &str) -> Self {
        Alert {
            header: ALERT_HEADER,
            message: format!("{}.{}.{}", APPLICATION_NAME, ENTITY_NAME, action),
            param: id.to_string(),
        }
    }

    pub fn apply(&self, response: &mut HttpResponseBuilder) {
        response
            .insert_header((self.header, self.message.clone()))
            .insert_header((PARAMS_HEADER, self.param.clone()));
    }
}
