//! Item catalogs for the built-in skins.

use crate::core::{ConfigError, ItemId};
use crate::theme::{ItemDisplay, Theme, ThemeItem};

fn emoji_theme(name: &str, items: &[(&str, &str)]) -> Result<Theme, ConfigError> {
    Theme::new(
        name,
        items
            .iter()
            .zip(1..)
            .map(|(&(emoji, label), id)| ThemeItem::new(ItemId::new(id), ItemDisplay::emoji(emoji), label)),
    )
}

fn image_theme(name: &str, dir: &str, items: &[(&str, &str)]) -> Result<Theme, ConfigError> {
    Theme::new(
        name,
        items.iter().zip(1..).map(|(&(file, label), id)| {
            ThemeItem::new(ItemId::new(id), ItemDisplay::image(format!("{}/{}", dir, file)), label)
        }),
    )
}

pub(super) fn animals() -> Result<Theme, ConfigError> {
    emoji_theme(
        "animals",
        &[
            ("\u{1F436}", "Dog"),
            ("\u{1F431}", "Cat"),
            ("\u{1F42E}", "Cow"),
            ("\u{1F437}", "Pig"),
            ("\u{1F438}", "Frog"),
            ("\u{1F981}", "Lion"),
        ],
    )
}

pub(super) fn dinos() -> Result<Theme, ConfigError> {
    emoji_theme(
        "dinos",
        &[
            ("\u{1F995}", "Brachio"),
            ("\u{1F996}", "T-Rex"),
            ("\u{1F409}", "Dragon"),
            ("\u{1F40A}", "Croc"),
            ("\u{1F98E}", "Lizard"),
            ("\u{1F9B4}", "Fossil"),
            ("\u{1F95A}", "Dino Egg"),
            ("\u{1F30B}", "Volcano"),
            ("\u{1FAB4}", "Fern"),
        ],
    )
}

pub(super) fn family() -> Result<Theme, ConfigError> {
    image_theme(
        "family",
        "images",
        &[
            ("benjamine.jpg", "Benjamine"),
            ("christopher.jpg", "Christopher"),
            ("dylan.jpg", "Dylan"),
            ("uncle-john.png", "Uncle John"),
            ("brendan.jpg", "Brendan"),
            ("auntie-cindy.jpg", "Auntie Cindy"),
            ("yaih-yaih.jpg", "Yaih Yaih"),
            ("mummy.png", "Mummy"),
            ("daddy.png", "Daddy"),
        ],
    )
}

pub(super) fn flags() -> Result<Theme, ConfigError> {
    image_theme(
        "flags",
        "flags",
        &[
            ("cambodia.svg", "Cambodia"),
            ("thailand.svg", "Thailand"),
            ("vietnam.svg", "Vietnam"),
            ("laos.svg", "Laos"),
            ("myanmar.svg", "Myanmar"),
            ("philippines.svg", "Philippines"),
            ("indonesia.svg", "Indonesia"),
            ("malaysia.svg", "Malaysia"),
            ("singapore.svg", "Singapore"),
        ],
    )
}

pub(super) fn foods() -> Result<Theme, ConfigError> {
    emoji_theme(
        "foods",
        &[
            ("\u{1F35C}", "Noodles"),
            ("\u{1F35A}", "Rice"),
            ("\u{1F96D}", "Mango"),
            ("\u{1F35B}", "Curry"),
            ("\u{1F965}", "Coconut"),
            ("\u{1F362}", "Satay"),
            ("\u{1F990}", "Shrimp"),
            ("\u{1F372}", "Hot Pot"),
            ("\u{1F95F}", "Dumpling"),
        ],
    )
}

pub(super) fn fruits() -> Result<Theme, ConfigError> {
    emoji_theme(
        "fruits",
        &[
            ("\u{1F34E}", "Apple"),
            ("\u{1F34C}", "Banana"),
            ("\u{1F347}", "Grapes"),
            ("\u{1F34A}", "Orange"),
            ("\u{1F353}", "Strawberry"),
            ("\u{1FAD0}", "Blueberry"),
        ],
    )
}

/// Numerals paired with the dice face showing the same count.
pub(super) fn numbers() -> Result<Theme, ConfigError> {
    const NAMES: [&str; 6] = ["One", "Two", "Three", "Four", "Five", "Six"];
    const DICE: [&str; 6] = ["\u{2680}", "\u{2681}", "\u{2682}", "\u{2683}", "\u{2684}", "\u{2685}"];

    Theme::new(
        "numbers",
        NAMES.iter().zip(DICE).zip(1u32..).map(|((&name, dice), n)| {
            ThemeItem::new(ItemId::new(n), ItemDisplay::glyph(n.to_string()), name)
                .with_pattern(ItemDisplay::glyph(dice))
        }),
    )
}
