//! CLI card dealing example.

use std::io::{self, Write};

use deckrs::{Card, Deck, DeckOptions, DrawError, Rank, Suit};

fn main() {
    println!("Card dealer CLI example (type 'q' to quit)");

    // Usage: deal [decks] [jokers]; missing values are prompted for.
    let mut args = std::env::args().skip(1);
    let Some(decks) = arg_or_prompt(args.next(), "Number of decks: ") else {
        return;
    };
    let Some(jokers) = arg_or_prompt(args.next(), "Number of jokers: ") else {
        return;
    };
    let omit_ranks = prompt_ranks("Ranks to omit (e.g. '2 3 J', blank for none): ");

    let options = DeckOptions::default()
        .with_decks(decks)
        .with_jokers(jokers)
        .with_omit_ranks(omit_ranks);
    let mut deck = Deck::from_options(&options);
    deck.shuffle();

    println!("Shuffled {} cards.", deck.len());

    loop {
        println!("\nDeck: {} of {} cards remaining", deck.remaining(), deck.len());

        match prompt_line("Action ([d]raw, deal [n], [s]huffle, [p]rint, [q]uit): ").as_str() {
            "d" | "draw" => match deck.draw() {
                Ok(card) => println!("Drew {}", format_card(&card)),
                Err(DrawError::Exhausted) => println!("The deck is exhausted. Shuffle to continue."),
                Err(err) => println!("Draw error: {err}"),
            },
            "s" | "shuffle" => {
                deck.shuffle();
                println!("Deck shuffled.");
            }
            "p" | "print" => println!("{deck}"),
            "q" | "quit" => break,
            input => match input.parse::<usize>() {
                Ok(count) => match deck.deal(count) {
                    Ok(hand) => println!("Dealt: {}", format_hand(&hand)),
                    Err(err) => println!("Deal error: {err}"),
                },
                Err(_) => println!("Unknown action."),
            },
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn arg_or_prompt(arg: Option<String>, prompt: &str) -> Option<usize> {
    match arg.map(|value| value.parse::<usize>()) {
        Some(Ok(value)) => Some(value),
        Some(Err(_)) => {
            println!("Ignoring non-numeric argument.");
            prompt_usize(prompt)
        }
        None => prompt_usize(prompt),
    }
}

fn prompt_ranks(prompt: &str) -> Vec<Rank> {
    loop {
        let input = prompt_line(prompt);
        let parsed: Option<Vec<Rank>> = input.split_whitespace().map(parse_rank).collect();
        match parsed {
            Some(ranks) => return ranks,
            None => println!("Use 2-10, j, q, k, or a."),
        }
    }
}

fn parse_rank(token: &str) -> Option<Rank> {
    match token {
        "j" => Some(Rank::Jack),
        "q" => Some(Rank::Queen),
        "k" => Some(Rank::King),
        "a" => Some(Rank::Ace),
        _ => token
            .parse::<u8>()
            .ok()
            .and_then(|value| Rank::try_from(value).ok()),
    }
}

fn format_hand(hand: &[Card]) -> String {
    if hand.is_empty() {
        return "(no cards)".to_string();
    }
    hand.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
        Suit::Joker => "35",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
