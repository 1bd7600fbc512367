use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Inputs {
    pub monthly_salary: f64,
    pub current_age: u32,
    pub retirement_age: u32,
    pub contribution_rate: f64,
    pub annual_salary_growth: f64,
    pub interest_rate: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub age: u32,
    pub monthly_salary: f64,
    pub yearly_contribution: f64,
    pub interest_earned: f64,
    pub balance_after: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub total_contribution: f64,
    pub total_interest: f64,
    pub final_balance: f64,
    pub yearly_data: Vec<YearRecord>,
}
