use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("monthly salary must be a finite amount > 0")]
    NonPositiveSalary,
    #[error("current age must be > 0")]
    ZeroCurrentAge,
    #[error("retirement age must be >= current age")]
    RetirementBeforeCurrentAge,
    #[error("retirement age must be <= 100")]
    RetirementAgeAboveMaximum,
    #[error("contribution rate must be between 0 and 1")]
    ContributionRateOutOfRange,
    #[error("annual salary growth must be a finite rate >= -1")]
    SalaryGrowthOutOfRange,
    #[error("interest rate must be a finite rate >= -1")]
    InterestRateOutOfRange,
}
