//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for CLI output and use case inputs/outputs.

mod report_dto;

pub use report_dto::{
    DriftReportDto, EntityCountsDto, RecalculateRequestDto, RecalculationReportDto, RiskSummaryDto,
    ScoreDriftDto, rank_risks,
};
