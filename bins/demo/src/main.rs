//! Tally demonstration driver
//!
//! Walks through `MonetaryValue`, `DecimalParser` and `MutableAmount`,
//! printing each result and reporting rejected inputs.

use std::fmt::Display;
use std::io::{self, Write};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::{CurrencyFormat, DecimalParser, MutableAmount};
use tally_shared::{AppConfig, AppResult, MonetaryValue};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let format = CurrencyFormat::from(&config.display);
    info!(
        symbol = %format.symbol,
        decimal_places = format.decimal_places,
        "Display format configured"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    monetary_values(&mut out)?;
    parsing(&mut out)?;
    mutable_amount(&mut out, &format)?;

    Ok(())
}

fn monetary_values<W: Write>(out: &mut W) -> io::Result<()> {
    info!("MonetaryValue");
    writeln!(out, "== MonetaryValue")?;

    for (amount, currency) in [(dec!(100.50), "USD"), (dec!(-25), "EUR"), (dec!(0), "JPY")] {
        let result = MonetaryValue::new(amount, currency)
            .map(|value| format!("{} (sign {})", value.describe(), value.sign()));
        report(out, &format!("{amount} {currency:?}"), result)?;
    }
    report(out, "1 \"\"", MonetaryValue::new(dec!(1), ""))
}

fn parsing<W: Write>(out: &mut W) -> io::Result<()> {
    info!("DecimalParser");
    writeln!(out, "== DecimalParser")?;

    for input in ["123.45", "7", "-5.25", "123.45.67", "12a.5", ""] {
        report(out, &format!("{input:?}"), DecimalParser::parse(input))?;
    }
    Ok(())
}

fn mutable_amount<W: Write>(out: &mut W, format: &CurrencyFormat) -> io::Result<()> {
    info!("MutableAmount");
    writeln!(out, "== MutableAmount")?;

    report(out, "new(-1)", MutableAmount::new(dec!(-1)).map(|a| a.amount()))?;

    let mut amount = match MutableAmount::new(dec!(100.75)) {
        Ok(amount) => amount,
        Err(e) => return report(out, "new(100.75)", Err::<Decimal, _>(e)),
    };
    amount.display(out, format)?;

    report(out, "set_sign(-1)", amount.set_sign(-1).map(|a| a.amount()))?;
    report(out, "set_sign(0)", amount.set_sign(0).map(|a| a.amount()))?;

    let after_integer = amount.set_integer_part(50).amount();
    report(out, "set_integer_part(50)", Ok(after_integer))?;

    for fractional in [dec!(1.0), dec!(-0.1), dec!(0.0), dec!(0.99)] {
        let result = amount.set_fractional_part(fractional).map(|a| a.amount());
        report(out, &format!("set_fractional_part({fractional})"), result)?;
    }
    amount.display(out, format)
}

/// Prints one demo step, logging rejected inputs at the boundary.
fn report<W: Write, T: Display>(out: &mut W, step: &str, result: AppResult<T>) -> io::Result<()> {
    match result {
        Ok(value) => writeln!(out, "{step} -> {value}"),
        Err(e) => {
            warn!(step, error_code = e.error_code(), error = %e, "Step rejected");
            writeln!(out, "{step} -> error {}: {e}", e.error_code())
        }
    }
}
