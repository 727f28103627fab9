//! CLI tool for card number classification.
//!
//! # Usage
//!
//! ```bash
//! # Classify one or more card numbers
//! cardcheck check 4532015112830366 5425233010103442
//!
//! # Run the built-in demonstration list
//! cardcheck sample
//!
//! # Show the brand registry
//! cardcheck brands
//!
//! # Checksum only, no brand rules
//! cardcheck luhn 4532015112830366
//!
//! # Generate test numbers
//! cardcheck generate --brand voyager --count 5
//! ```

use cardcheck::{generate, passes_luhn, registry, validate, Brand};
use clap::{Parser, Subcommand, ValueEnum};

/// Built-in demonstration numbers. The list intentionally mixes valid
/// numbers with ones that fail each stage: a bad checksum, a length outside
/// the brand's set, and no matching pattern.
const SAMPLE_NUMBERS: [&str; 10] = [
    "4532015112830366",
    "5425233010103442",
    "374245455400126",
    "36148906313152",
    "6011111111111117",
    "3530111333300000",
    "8699999999999999",
    "5078601200000000",
    "5067123456789012",
    "1234567890123456",
];

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Card number brand classification and Luhn validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify card numbers (spaces and dashes allowed)
    Check {
        /// Card numbers to classify
        #[arg(required = true)]
        numbers: Vec<String>,
    },

    /// Run the built-in demonstration list
    Sample,

    /// Print the brand registry in match-priority order
    Brands,

    /// Check the Luhn checksum only, ignoring brand and length rules
    Luhn {
        /// Card number to check
        number: String,
    },

    /// Generate test numbers (for testing only)
    Generate {
        /// Card brand to generate
        #[arg(short, long, default_value = "visa")]
        brand: BrandArg,

        /// Number of card numbers to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BrandArg {
    Visa,
    Mastercard,
    Amex,
    DinersClub,
    Discover,
    Enroute,
    Jcb,
    Voyager,
    Hipercard,
    Aura,
}

impl From<BrandArg> for Brand {
    fn from(arg: BrandArg) -> Self {
        match arg {
            BrandArg::Visa => Brand::Visa,
            BrandArg::Mastercard => Brand::MasterCard,
            BrandArg::Amex => Brand::Amex,
            BrandArg::DinersClub => Brand::DinersClub,
            BrandArg::Discover => Brand::Discover,
            BrandArg::Enroute => Brand::EnRoute,
            BrandArg::Jcb => Brand::Jcb,
            BrandArg::Voyager => Brand::Voyager,
            BrandArg::Hipercard => Brand::HiperCard,
            BrandArg::Aura => Brand::Aura,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { numbers } => {
            cmd_check(&numbers);
        }
        Commands::Sample => {
            cmd_sample();
        }
        Commands::Brands => {
            cmd_brands();
        }
        Commands::Luhn { number } => {
            cmd_luhn(&number);
        }
        Commands::Generate { brand, count } => {
            cmd_generate(brand.into(), count);
        }
    }
}

fn cmd_check(numbers: &[String]) {
    let mut all_valid = true;

    for number in numbers {
        let result = validate(number);
        if !result.is_valid() {
            all_valid = false;
        }
        println!("{}", result);
    }

    std::process::exit(if all_valid { 0 } else { 1 });
}

fn cmd_sample() {
    for number in SAMPLE_NUMBERS {
        println!("{}", validate(number));
    }
}

fn cmd_brands() {
    for def in registry::all() {
        println!(
            "{:<18} lengths {:<8} {}",
            def.name(),
            format!("{:?}", def.accepted_lengths()),
            def.pattern()
        );
    }
}

fn cmd_luhn(number: &str) {
    if passes_luhn(number) {
        println!("Luhn check: PASS");
        std::process::exit(0);
    } else {
        println!("Luhn check: FAIL");
        std::process::exit(1);
    }
}

fn cmd_generate(brand: Brand, count: usize) {
    for number in generate::generate_many(brand, count) {
        println!("{}", number);
    }
}
