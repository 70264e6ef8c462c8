use crate::commands::{print_json, Context};
use crate::error::{invalid_input, rejected};
use anyhow::Result;
use clap::Args;
use cleanbook_core::{normalize_email, normalize_phone, Normalized};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct PhoneArgs {
    pub raw: String,
    #[arg(long)]
    pub region: Option<String>,
}

#[derive(Debug, Args)]
pub struct EmailArgs {
    pub raw: String,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    input: CheckInput<'a>,
    normalized: FieldPair<&'a str>,
    valid: FieldPair<bool>,
    reasons: FieldPair<&'a str>,
}

#[derive(Debug, Serialize)]
struct CheckInput<'a> {
    phone: &'a str,
    email: &'a str,
    default_region: &'a str,
}

#[derive(Debug, Serialize)]
struct FieldPair<T> {
    phone: T,
    email: T,
}

pub fn phone(ctx: &Context<'_>, args: PhoneArgs) -> Result<()> {
    let region = ctx.region(args.region.as_deref());
    let result = normalize_phone(&args.raw, region);
    debug!(region, reason = %result.reason, "phone normalized");
    print_result(ctx, &result)?;
    ensure_valid("phone", &result)
}

pub fn email(ctx: &Context<'_>, args: EmailArgs) -> Result<()> {
    let result = normalize_email(&args.raw);
    debug!(reason = %result.reason, "email normalized");
    print_result(ctx, &result)?;
    ensure_valid("email", &result)
}

pub fn check(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    if args.phone.is_none() && args.email.is_none() {
        return Err(invalid_input("provide --phone and/or --email"));
    }
    let raw_phone = args.phone.as_deref().unwrap_or("");
    let raw_email = args.email.as_deref().unwrap_or("");
    let region = ctx.region(args.region.as_deref());

    let phone = normalize_phone(raw_phone, region);
    let email = normalize_email(raw_email);

    if ctx.json {
        print_json(&CheckReport {
            input: CheckInput {
                phone: raw_phone,
                email: raw_email,
                default_region: region,
            },
            normalized: FieldPair {
                phone: &phone.value,
                email: &email.value,
            },
            valid: FieldPair {
                phone: phone.is_valid,
                email: email.is_valid,
            },
            reasons: FieldPair {
                phone: &phone.reason,
                email: &email.reason,
            },
        })?;
    } else {
        println!("phone: {} ({})", display_value(&phone), phone.reason);
        println!("email: {} ({})", display_value(&email), email.reason);
    }

    if phone.is_valid && email.is_valid {
        Ok(())
    } else {
        Err(rejected(format!(
            "partial result: phone {}, email {}",
            phone.reason, email.reason
        )))
    }
}

fn print_result(ctx: &Context<'_>, result: &Normalized) -> Result<()> {
    if ctx.json {
        return print_json(result);
    }
    if result.is_valid {
        println!("{}", result.value);
    }
    Ok(())
}

fn ensure_valid(field: &str, result: &Normalized) -> Result<()> {
    if result.is_valid {
        Ok(())
    } else {
        Err(rejected(format!("{field}: {}", result.reason)))
    }
}

fn display_value(result: &Normalized) -> &str {
    if result.is_valid {
        &result.value
    } else {
        "-"
    }
}
