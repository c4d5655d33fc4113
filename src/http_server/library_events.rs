//! Handlers for the library event endpoints.
//!
//! Both handlers are fire-and-continue: they respond as soon as the record
//! has been handed to the stream client, before the broker acknowledges it.
//! The response status therefore means "accepted for publishing", not
//! "durably stored".

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::{ApiError, ApiState};
use crate::models::{LibraryEvent, LibraryEventType};

/// Accepts a new-book event, tags it as `NEW` and submits it for publishing.
pub async fn post_library_event(
    State(state): State<ApiState>,
    Json(mut event): Json<LibraryEvent>,
) -> Result<impl IntoResponse, ApiError> {
    // The mutation kind is derived from the route, never from the payload.
    event.library_event_type = Some(LibraryEventType::New);

    state.publisher.publish(&event).await?;
    tracing::debug!(event_id = ?event.library_event_id, "Library event submitted");

    Ok((StatusCode::CREATED, Json(event)))
}

/// Accepts an update event for an existing book record, tags it as `UPDATE`
/// and submits it for publishing.
///
/// Requires a `libraryEventId`; without one the request is rejected before
/// any publish attempt is made.
pub async fn put_library_event(
    State(state): State<ApiState>,
    Json(mut event): Json<LibraryEvent>,
) -> Result<impl IntoResponse, ApiError> {
    if event.library_event_id.is_none() {
        return Err(ApiError::MissingEventId);
    }
    event.library_event_type = Some(LibraryEventType::Update);

    state.publisher.publish(&event).await?;
    tracing::debug!(event_id = ?event.library_event_id, "Library event submitted");

    Ok((StatusCode::OK, Json(event)))
}
