use anyhow::Result;
use breeze_core::{Favourites, WeatherProvider, fetch_each, presenter};
use inquire::Text;

const MENU: &str = "\
============================
 BREEZE - MAIN MENU
============================
1. Search weather for a city
2. Add a city to favourites
3. List favourite cities
4. Remove a city from favourites
5. Exit
============================";

/// One menu choice. Every variant maps to a numbered line of [`MENU`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Search,
    Add,
    List,
    Remove,
    Exit,
}

impl Command {
    /// Map an input line onto a command. `None` for anything that is not
    /// one of the five numbered choices.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Search),
            "2" => Some(Self::Add),
            "3" => Some(Self::List),
            "4" => Some(Self::Remove),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The blocking menu loop. Returns only when the user picks "Exit";
/// every recoverable error is printed and the loop continues.
pub async fn run(provider: &dyn WeatherProvider, favourites: &mut Favourites) -> Result<()> {
    loop {
        println!("\n{MENU}");

        let choice = Text::new("Choose an option (1-5):").prompt()?;
        let Some(command) = Command::parse(&choice) else {
            println!("Invalid choice. Try again.");
            continue;
        };

        match command {
            Command::Search => search(provider).await?,
            Command::Add => add(favourites)?,
            Command::List => list(provider, favourites).await,
            Command::Remove => remove(favourites)?,
            Command::Exit => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}

async fn search(provider: &dyn WeatherProvider) -> Result<()> {
    let city = prompt_city("Enter city name:")?;

    match provider.current(&city).await {
        Ok(record) => println!("{}", presenter::format(&record)),
        Err(err) => println!("Error: unable to fetch weather for '{city}': {err}"),
    }

    Ok(())
}

fn add(favourites: &mut Favourites) -> Result<()> {
    let city = prompt_city("Enter city name to add:")?;

    match favourites.add(&city) {
        Ok(()) => println!("'{city}' added to favourites."),
        Err(err) => println!("{err}"),
    }

    Ok(())
}

async fn list(provider: &dyn WeatherProvider, favourites: &Favourites) {
    if favourites.is_empty() {
        println!("No favourite cities yet.");
        return;
    }

    println!("\n====== Favourite Cities ======");

    for (city, outcome) in fetch_each(provider, favourites.cities()).await {
        match outcome {
            Ok(record) => println!("{}", presenter::format(&record)),
            Err(err) => println!("Skipping '{city}': {err}"),
        }
    }

    println!("==============================");
}

fn remove(favourites: &mut Favourites) -> Result<()> {
    let city = prompt_city("Enter city name to remove:")?;

    match favourites.remove(&city) {
        Ok(()) => println!("'{city}' removed from favourites."),
        Err(err) => println!("{err}"),
    }

    Ok(())
}

fn prompt_city(message: &str) -> Result<String> {
    let raw = Text::new(message).prompt()?;
    Ok(raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_choices_map_to_commands() {
        assert_eq!(Command::parse("1"), Some(Command::Search));
        assert_eq!(Command::parse("2"), Some(Command::Add));
        assert_eq!(Command::parse("3"), Some(Command::List));
        assert_eq!(Command::parse("4"), Some(Command::Remove));
        assert_eq!(Command::parse("5"), Some(Command::Exit));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(Command::parse("  3 \n"), Some(Command::List));
    }

    #[test]
    fn anything_else_is_rejected() {
        for input in ["", "0", "6", "exit", "one", "1 2"] {
            assert_eq!(Command::parse(input), None, "input: {input:?}");
        }
    }
}
