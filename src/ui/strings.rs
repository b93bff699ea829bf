//! Localized text (Spanish and English)

use serde::{Deserialize, Serialize};

use crate::sim::{Direction, Proximity};

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// First characters accepted as "yes"
    pub fn is_yes(&self, c: char) -> bool {
        match self {
            Lang::Es => matches!(c, 's' | 'S' | 'y' | 'Y' | 'í' | 'Í'),
            Lang::En => matches!(c, 'y' | 'Y'),
        }
    }

    /// First characters accepted as "no"
    pub fn is_no(&self, c: char) -> bool {
        match self {
            Lang::Es => matches!(c, 'n' | 'N' | 'o' | 'O'),
            Lang::En => matches!(c, 'n' | 'N'),
        }
    }

    pub fn strings(self) -> Strings {
        Strings { lang: self }
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es" => Ok(Lang::Es),
            "en" => Ok(Lang::En),
            other => Err(format!("unsupported language '{other}' (expected es or en)")),
        }
    }
}

/// Message table for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub lang: Lang,
}

impl Strings {
    fn pick(&self, es: &'static str, en: &'static str) -> &'static str {
        match self.lang {
            Lang::Es => es,
            Lang::En => en,
        }
    }

    pub fn title(&self) -> &'static str {
        self.pick("Juego: Adivina el Número", "Game: Guess the Number")
    }

    pub fn intro(&self, min: i64, max: i64, attempts: u32) -> String {
        match self.lang {
            Lang::Es => format!(
                "He pensado un número entero entre {min} y {max}. Tienes {attempts} intentos."
            ),
            Lang::En => format!(
                "I'm thinking of an integer between {min} and {max}. You have {attempts} attempts."
            ),
        }
    }

    pub fn attempt_prompt(&self, attempt: u32) -> String {
        format!("{} {}: ", self.pick("Intento", "Attempt"), attempt)
    }

    pub fn invalid_int(&self) -> &'static str {
        self.pick(
            "Debes introducir un número entero. Inténtalo de nuevo.",
            "An integer is required. Try again.",
        )
    }

    pub fn out_of_range(&self, min: i64, max: i64) -> String {
        match self.lang {
            Lang::Es => format!("El número está fuera del rango [{min}..{max}]. Inténtalo otra vez."),
            Lang::En => format!("Number is out of range [{min}..{max}]. Try again."),
        }
    }

    pub fn direction(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::TooLow => self.pick("Mi número es mayor.", "My number is higher."),
            Direction::TooHigh => self.pick("Mi número es menor.", "My number is lower."),
        }
    }

    pub fn proximity(&self, tier: Proximity) -> &'static str {
        match tier {
            Proximity::VeryHot => self.pick("muy caliente", "very hot"),
            Proximity::Hot => self.pick("caliente", "hot"),
            Proximity::Warm => self.pick("templado", "warm"),
            Proximity::Cold => self.pick("frío", "cold"),
        }
    }

    pub fn remaining(&self, n: u32) -> String {
        format!("{} {}", self.pick("Intentos restantes:", "Attempts left:"), n)
    }

    pub fn win(&self, used: u32) -> String {
        let suffix = if used == 1 { "" } else { "s" };
        match self.lang {
            Lang::Es => format!("¡Correcto! 🎉 Lo adivinaste en {used} intento{suffix}."),
            Lang::En => format!("Correct! 🎉 You guessed it in {used} attempt{suffix}."),
        }
    }

    pub fn lose(&self, secret: i64) -> String {
        match self.lang {
            Lang::Es => format!("Se acabaron los intentos. El número era: {secret}"),
            Lang::En => format!("No attempts left. The secret number was: {secret}"),
        }
    }

    pub fn score(&self, score: u64) -> String {
        format!("{} {}", self.pick("Tu puntuación:", "Your score:"), score)
    }

    pub fn new_record(&self, previous: Option<u64>, now: u64) -> String {
        let prev = previous.map_or_else(|| "-".to_string(), |p| p.to_string());
        match self.lang {
            Lang::Es => format!("¡Nuevo récord! 🏆 Antes: {prev}, ahora: {now}"),
            Lang::En => format!("New high score! 🏆 Was: {prev}, now: {now}"),
        }
    }

    pub fn play_again(&self) -> &'static str {
        self.pick("¿Quieres jugar otra vez? [Y/n]: ", "Play again? [Y/n]: ")
    }

    pub fn goodbye(&self) -> &'static str {
        self.pick("¡Hasta luego!", "See you!")
    }

    pub fn help_proximity(&self) -> &'static str {
        self.pick(
            "Pistas de proximidad activadas (caliente/frío).",
            "Proximity hints enabled (hot/cold).",
        )
    }

    pub fn config_error_range(&self) -> &'static str {
        self.pick(
            "Error: el rango debe contener al menos 2 números (min < max).",
            "Error: range must contain at least 2 numbers (min < max).",
        )
    }

    pub fn config_error_attempts(&self) -> &'static str {
        self.pick(
            "Error: el número de intentos debe ser >= 1.",
            "Error: number of attempts must be >= 1.",
        )
    }

    pub fn aborted(&self) -> &'static str {
        self.pick("Interrumpido por el usuario.", "Aborted by user.")
    }

    pub fn end_of_input(&self) -> &'static str {
        self.pick("Entrada finalizada.", "Input ended.")
    }

    pub fn version(&self, version: &str) -> String {
        format!("{} {}", self.pick("Versión del programa:", "Program version:"), version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_plural() {
        let en = Lang::En.strings();
        assert_eq!(en.win(1), "Correct! 🎉 You guessed it in 1 attempt.");
        assert_eq!(en.win(3), "Correct! 🎉 You guessed it in 3 attempts.");
    }

    #[test]
    fn test_record_without_previous() {
        assert_eq!(
            Lang::En.strings().new_record(None, 120),
            "New high score! 🏆 Was: -, now: 120"
        );
        assert_eq!(
            Lang::Es.strings().new_record(Some(110), 130),
            "¡Nuevo récord! 🏆 Antes: 110, ahora: 130"
        );
    }

    #[test]
    fn test_yes_no_sets() {
        assert!(Lang::Es.is_yes('s'));
        assert!(Lang::Es.is_yes('Í'));
        assert!(!Lang::En.is_yes('s'));
        assert!(Lang::En.is_no('N'));
        assert!(Lang::Es.is_no('o'));
        assert!(Lang::Es.is_no('O'));
        assert!(!Lang::En.is_no('o'));
    }

    #[test]
    fn test_lang_from_str() {
        assert_eq!("EN".parse::<Lang>(), Ok(Lang::En));
        assert!("fr".parse::<Lang>().is_err());
    }
}
