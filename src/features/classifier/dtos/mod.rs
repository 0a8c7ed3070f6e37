mod classify_dto;

pub use classify_dto::{ClassifyRequestDto, SuggestionResponseDto};
