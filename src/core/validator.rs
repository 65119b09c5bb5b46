//! Deep link validation.
//!
//! Turns any string into a navigable [`DeepLinkData`] plus diagnostics.
//! Problems are split into two tiers:
//!
//! - **errors** make the destination meaningless, so the whole route is
//!   replaced with the documents list and the result is invalid;
//! - **warnings** concern optional hints. An unrecognized `contentType` is
//!   corrected to `document`; malformed `replyTo` / `editingDraftId` values
//!   are reported but passed through unchanged.

use crate::core::parser::{check_structure, parse_deep_link_url};
use crate::models::{
    AppRouteData, ContentType, DeepLinkData, DocumentRoute, PublishParams, ValidationError,
    ValidationResult, ValidationWarning,
};
use crate::utils::patterns::{is_valid_reply_to, is_valid_uuid};

/// Validate a deep link, always producing a navigable destination.
pub fn validate_deep_link_url(url: &str) -> ValidationResult {
    if let Err(err) = check_structure(url) {
        return ValidationResult::fallback(url, err);
    }

    let mut data = match parse_deep_link_url(url) {
        Ok(data) => data,
        Err(err) => return ValidationResult::fallback(url, err),
    };

    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    let app = data.app;
    let has_route_parameters = data.has_route_parameters();

    match &mut data.route {
        AppRouteData::Documents(route) => {
            validate_document_route(route, &mut warnings, &mut errors);
        }
        AppRouteData::PodCollection | AppRouteData::PodEditor | AppRouteData::Frogcrypto => {
            if has_route_parameters {
                warnings.push(ValidationWarning::IgnoredRouteParameters { app });
            }
        }
    }

    apply_safety_fallbacks(&mut data, &mut warnings, &mut errors);

    let valid = errors.is_empty();
    data.valid = valid;

    ValidationResult {
        valid,
        data,
        warnings,
        errors,
    }
}

fn validate_document_route(
    route: &mut DocumentRoute,
    warnings: &mut Vec<ValidationWarning>,
    errors: &mut Vec<ValidationError>,
) {
    match route {
        DocumentRoute::DocumentDetail { id } => {
            if *id <= 0 {
                errors.push(ValidationError::InvalidDocumentId { id: *id });
                *route = DocumentRoute::DocumentsList;
            }
        }
        DocumentRoute::Publish(params) => validate_publish_params(params, warnings),
        DocumentRoute::DocumentsList | DocumentRoute::Drafts | DocumentRoute::Debug => {}
    }
}

fn validate_publish_params(params: &mut PublishParams, warnings: &mut Vec<ValidationWarning>) {
    if let Some(content_type) = &params.content_type
        && !content_type.is_recognized()
    {
        warnings.push(ValidationWarning::ContentTypeCorrected {
            given: content_type.to_string(),
        });
        params.content_type = Some(ContentType::Document);
    }

    if let Some(reply_to) = &params.reply_to
        && !is_valid_reply_to(reply_to)
    {
        warnings.push(ValidationWarning::MalformedReplyTo {
            value: reply_to.clone(),
        });
    }

    if let Some(draft_id) = &params.editing_draft_id
        && !is_valid_uuid(draft_id)
    {
        warnings.push(ValidationWarning::MalformedDraftId {
            value: draft_id.clone(),
        });
    }
}

/// Final pass that repairs anything still unsafe to navigate to.
///
/// Runs independently of the per-route checks, so a route kind those checks
/// miss still cannot leave the validator in a non-navigable state.
pub fn apply_safety_fallbacks(
    data: &mut DeepLinkData,
    warnings: &mut Vec<ValidationWarning>,
    errors: &mut Vec<ValidationError>,
) {
    if data.app != data.route.app() {
        data.set_route(data.route.clone());
    }

    let AppRouteData::Documents(route) = &mut data.route else {
        return;
    };

    match route {
        DocumentRoute::DocumentDetail { id } if *id <= 0 => {
            *route = DocumentRoute::DocumentsList;
            errors.push(ValidationError::NotNavigable);
        }
        DocumentRoute::Publish(PublishParams {
            content_type: Some(content_type),
            ..
        }) if !content_type.is_recognized() => {
            warnings.push(ValidationWarning::ContentTypeCorrected {
                given: content_type.to_string(),
            });
            *content_type = ContentType::Document;
        }
        _ => {}
    }
}

/// Whether the navigation layer can render `data` without further checks.
pub fn is_navigable(data: &DeepLinkData) -> bool {
    if data.app != data.route.app() {
        return false;
    }

    match &data.route {
        AppRouteData::Documents(DocumentRoute::DocumentDetail { id }) => *id > 0,
        AppRouteData::Documents(DocumentRoute::Publish(params)) => params
            .content_type
            .as_ref()
            .is_none_or(ContentType::is_recognized),
        AppRouteData::Documents(_) => true,
        AppRouteData::PodCollection | AppRouteData::PodEditor | AppRouteData::Frogcrypto => true,
    }
}

// =============================================================================
// Tests
// =============================================================================
