//! Energy state command.

use clap::Args;

use lithos_core::estimate_energy_state;

use super::{CommandResult, GlobalOpts, ProfileText};

#[derive(Args, Debug)]
pub struct EnergyArgs {
    #[command(flatten)]
    pub profile: ProfileText,
}

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn run(args: EnergyArgs, global: &GlobalOpts) -> CommandResult {
    let now = global.now();
    let profile = args.profile.to_profile();
    let state = estimate_energy_state(now, profile.as_ref());

    if global.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    let day = DAY_NAMES[usize::from(state.day_of_week) % 7];
    let weekend = if state.is_weekend() { ", weekend" } else { "" };
    println!("Energy state at {} ({day}{weekend})", now.format("%Y-%m-%d %H:%M"));
    println!("  Physical:  {}", bar(state.physical));
    println!("  Mental:    {}", bar(state.mental));
    println!("  Spiritual: {}", bar(state.spiritual));
    println!("  Balance:   {:.1}", state.balance);
    println!("  Trend:     {}", state.trend.name());
    println!("  Time:      {}", state.time_bucket.name());
    Ok(())
}

fn bar(value: u8) -> String {
    let filled = usize::from(value / 10);
    format!("{}{} {value:>2}", "#".repeat(filled), ".".repeat(10usize.saturating_sub(filled)))
}
