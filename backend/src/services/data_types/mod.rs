//! Catalogue of the data kinds the generator understands.

use crate::generator::kind::catalogue;
use actix_web::web::{get, scope};
use actix_web::{HttpResponse, Responder, Scope};

const API_PATH: &str = "/api/data-types";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process() -> impl Responder {
    HttpResponse::Ok().json(catalogue())
}
