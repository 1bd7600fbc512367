use clap::{Args, Parser, Subcommand};

use provident::api;
use provident::core::{Inputs, project};
use provident::report;

#[derive(Parser, Debug)]
#[command(
    name = "provident",
    about = "EPF maturity calculator (yearly compounding + salary growth) with a web front end"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Serve the web calculator and JSON API")]
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    #[command(about = "Run one projection and print the year-by-year breakdown")]
    Project(ProjectArgs),
}

#[derive(Args, Debug)]
struct ProjectArgs {
    #[arg(long, default_value_t = 50_000.0, help = "Monthly salary (basic + DA)")]
    monthly_salary: f64,
    #[arg(long, default_value_t = 30)]
    current_age: u32,
    #[arg(long, default_value_t = 60)]
    retirement_age: u32,
    #[arg(
        long,
        default_value_t = 24.0,
        help = "Share of salary contributed in percent"
    )]
    contribution_rate: f64,
    #[arg(long, default_value_t = 5.0, help = "Annual salary increase in percent")]
    annual_increase: f64,
    #[arg(long, default_value_t = 8.25, help = "Annual interest rate in percent")]
    interest_rate: f64,
    #[arg(long, help = "Print every projected year instead of the first and last five")]
    show_all_years: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port } => {
            if let Err(e) = api::run_http_server(port).await {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Project(args) => run_projection(&args),
    }
}

fn run_projection(args: &ProjectArgs) {
    let inputs = Inputs {
        monthly_salary: args.monthly_salary,
        current_age: args.current_age,
        retirement_age: args.retirement_age,
        contribution_rate: args.contribution_rate / 100.0,
        annual_salary_growth: args.annual_increase / 100.0,
        interest_rate: args.interest_rate / 100.0,
    };

    match project(&inputs) {
        Ok(result) => {
            print!("{}", report::render_summary(&result));
            println!();
            print!(
                "{}",
                report::render_yearly_breakdown(&result.yearly_data, args.show_all_years)
            );
        }
        Err(err) => {
            eprintln!("Invalid inputs: {err}");
            std::process::exit(1);
        }
    }
}
