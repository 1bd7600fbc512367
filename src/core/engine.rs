use super::error::InvalidInput;
use super::types::{Inputs, ProjectionResult, YearRecord};

pub const MAX_RETIREMENT_AGE: u32 = 100;

pub fn project(inputs: &Inputs) -> Result<ProjectionResult, InvalidInput> {
    validate(inputs)?;

    let years = inputs.retirement_age - inputs.current_age;
    let mut salary = inputs.monthly_salary;
    let mut balance = 0.0_f64;
    let mut total_contribution = 0.0_f64;
    let mut total_interest = 0.0_f64;
    let mut yearly_data = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let contribution = salary * 12.0 * inputs.contribution_rate;
        // Interest accrues on the opening balance only; this year's
        // contribution starts earning next year.
        let interest = balance * inputs.interest_rate;
        balance += contribution + interest;
        total_contribution += contribution;
        total_interest += interest;

        yearly_data.push(YearRecord {
            age: inputs.current_age + year,
            monthly_salary: round2(salary),
            yearly_contribution: round2(contribution),
            interest_earned: round2(interest),
            balance_after: round2(balance),
        });

        salary *= 1.0 + inputs.annual_salary_growth;
    }

    Ok(ProjectionResult {
        total_contribution: round2(total_contribution),
        total_interest: round2(total_interest),
        final_balance: round2(balance),
        yearly_data,
    })
}

fn validate(inputs: &Inputs) -> Result<(), InvalidInput> {
    if !inputs.monthly_salary.is_finite() || inputs.monthly_salary <= 0.0 {
        return Err(InvalidInput::NonPositiveSalary);
    }

    if inputs.current_age == 0 {
        return Err(InvalidInput::ZeroCurrentAge);
    }

    if inputs.retirement_age < inputs.current_age {
        return Err(InvalidInput::RetirementBeforeCurrentAge);
    }

    if inputs.retirement_age > MAX_RETIREMENT_AGE {
        return Err(InvalidInput::RetirementAgeAboveMaximum);
    }

    if !inputs.contribution_rate.is_finite() || !(0.0..=1.0).contains(&inputs.contribution_rate) {
        return Err(InvalidInput::ContributionRateOutOfRange);
    }

    if !inputs.annual_salary_growth.is_finite() || inputs.annual_salary_growth < -1.0 {
        return Err(InvalidInput::SalaryGrowthOutOfRange);
    }

    if !inputs.interest_rate.is_finite() || inputs.interest_rate < -1.0 {
        return Err(InvalidInput::InterestRateOutOfRange);
    }

    Ok(())
}

// Display rounding only; accumulators stay at full precision.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
