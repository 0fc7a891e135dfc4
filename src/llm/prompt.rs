//! Prompt construction

use crate::error::Result;
use crate::language::catalog::{render, Catalog};
use crate::types::{GenerationRequest, GenerationSubject};
use std::ops::RangeInclusive;

/// How many names each prompt asks for
pub const CANDIDATE_RANGE: RangeInclusive<usize> = 7..=10;

/// Build the instruction for a generation request, in the request's language
pub fn build_prompt(catalog: &Catalog, request: &GenerationRequest) -> Result<String> {
    let messages = catalog.get(request.language);
    let min = CANDIDATE_RANGE.start().to_string();
    let max = CANDIDATE_RANGE.end().to_string();

    match &request.subject {
        GenerationSubject::SimilarTo(name) => render(
            messages.similar_name_prompt,
            &[("name", name.trim()), ("min", min.as_str()), ("max", max.as_str())],
        ),
        GenerationSubject::Attributes(attributes) => render(
            messages.attribute_prompt,
            &[
                ("industry", attributes.industry.trim()),
                ("unique_feature", attributes.unique_feature.trim()),
                ("min", min.as_str()),
                ("max", max.as_str()),
            ],
        ),
    }
}
