use clap::Args;

use lithos_core::ChakraScore;

use super::{CommandResult, GlobalOpts, ProfileText};

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub text: ProfileText,
}

pub fn run(args: ProfileArgs, global: &GlobalOpts) -> CommandResult {
    let profile = args.text.to_profile().unwrap_or_default();

    if global.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let personality = if profile.personality_type.is_empty() {
        "(none)"
    } else {
        profile.personality_type.as_str()
    };
    println!("Personality:       {personality}");
    println!("Emotional pattern: {}", profile.emotional_pattern.name());
    println!("Energy archetype:  {}", profile.energy_archetype.name());
    println!("Preferred energy:  {}", profile.preferred_energy_level);
    println!("Chakra balance:");
    for (chakra, score) in &profile.chakra_balance {
        match score {
            ChakraScore::Known(v) => println!("  {:<13} {v}", chakra.name()),
            ChakraScore::Unknown => println!("  {:<13} unknown", chakra.name()),
        }
    }
    Ok(())
}
