//! Notes REST API — list, create, read, update and delete under `/notes`.
//!
//! Both `/notes/{id}/` and `/notes/{id}` are routed.
//!
//! Extractor failures (malformed JSON, missing fields, non-integer ids) are
//! reported as 422 with the same `{"detail": ...}` body as service errors.

use actix_web::{error, web, HttpRequest, HttpResponse};
use notes_types::{ErrorDetail, NotePayload};

use crate::notes::NoteError;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(
                web::resource(["", "/"])
                    .route(web::get().to(read_all_notes))
                    .route(web::post().to(create_note)),
            )
            .service(
                web::resource(["/{id}", "/{id}/"])
                    .route(web::get().to(read_note))
                    .route(web::put().to(update_note))
                    .route(web::delete().to(delete_note)),
            ),
    );
}

fn unprocessable<E>(err: E, detail: String) -> error::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    error::InternalError::from_response(
        err,
        HttpResponse::UnprocessableEntity().json(ErrorDetail::new(detail)),
    )
    .into()
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = format!("Invalid note payload: {}", err);
    unprocessable(err, detail)
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> error::Error {
    let detail = format!("Invalid note id: {}", err);
    unprocessable(err, detail)
}

/// GET /notes/
async fn read_all_notes(state: web::Data<AppState>) -> Result<HttpResponse, NoteError> {
    let notes = state.notes.list_notes()?;
    Ok(HttpResponse::Ok().json(notes))
}

/// POST /notes/
async fn create_note(
    state: web::Data<AppState>,
    body: web::Json<NotePayload>,
) -> Result<HttpResponse, NoteError> {
    let note = state.notes.create_note(&body)?;
    Ok(HttpResponse::Created().json(note))
}

/// GET /notes/{id}/
async fn read_note(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, NoteError> {
    let note = state.notes.get_note(path.into_inner())?;
    Ok(HttpResponse::Ok().json(note))
}

/// PUT /notes/{id}/
async fn update_note(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<NotePayload>,
) -> Result<HttpResponse, NoteError> {
    let note = state.notes.update_note(path.into_inner(), &body)?;
    Ok(HttpResponse::Ok().json(note))
}

/// DELETE /notes/{id}/
async fn delete_note(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, NoteError> {
    let note = state.notes.delete_note(path.into_inner())?;
    Ok(HttpResponse::Ok().json(note))
}
