use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};
use sportdir_boundary::Error as JsonErrorResponse;

use super::{guards::*, sqlite, Cfg};
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
};
use sportdir_application::prelude as flows;

mod error;
mod facilities;
mod taxonomy;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   facilities   --- //
        facilities::post_facility,
        facilities::get_facility,
        facilities::post_facility_review,
        // ---   taxonomy   --- //
        taxonomy::get_taxonomy,
        taxonomy::post_taxonomy_review,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
