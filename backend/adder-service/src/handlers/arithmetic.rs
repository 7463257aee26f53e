use actix_web::{web, HttpResponse};

use crate::error::{AppError, Result};
use crate::models::AddResponse;
use crate::services;

pub const NUMBER_PARAM: &str = "number";

/// Value of the last occurrence of `name`; repeated parameters resolve to the last one.
fn last_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// `GET /?number=<int>` returns `{"result": number + 2}`.
pub async fn add_two(query: web::Query<Vec<(String, String)>>) -> Result<HttpResponse> {
    let raw = last_value(&query, NUMBER_PARAM)
        .ok_or_else(|| AppError::missing_query(NUMBER_PARAM))?;
    let number = services::parse_int(raw)
        .map_err(|err| AppError::invalid_integer(NUMBER_PARAM, err, raw))?;

    let body = AddResponse::new(&services::add_two(&number))?;
    Ok(HttpResponse::Ok().json(body))
}
