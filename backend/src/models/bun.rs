use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Crop focus used when a bun does not set one.
pub const DEFAULT_FOCUS: f64 = 0.5;

/// Credit for the bun's hoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BunSource {
    /// Platform where the image is from, e.g. `Reddit`.
    #[validate(length(min = 1))]
    pub platform: String,
    pub author: String,
    /// Post where the bun was shared.
    #[validate(url)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BunDefinition {
    /// File name inside `<static_dir>/buns/`.
    #[validate(length(min = 1))]
    pub filename: String,
    pub name: Option<String>,
    #[validate(nested)]
    pub source: BunSource,
    /// Clock position of the left ear, read as an hour.
    #[validate(range(min = 1, max = 12))]
    pub left_ear: u32,
    #[validate(range(min = 1, max = 12))]
    pub right_ear: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub focus_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub focus_y: Option<f64>,
}

impl BunDefinition {
    pub fn focus_x(&self) -> f64 {
        self.focus_x.unwrap_or(DEFAULT_FOCUS)
    }

    pub fn focus_y(&self) -> f64 {
        self.focus_y.unwrap_or(DEFAULT_FOCUS)
    }

    /// Clock positions the left ear is allowed to stand for.
    pub fn left_ear_range(&self) -> Vec<u32> {
        match self.left_ear {
            6 => vec![6, 7],
            12 => vec![11, 12],
            1 => vec![12, 1],
            o => vec![o - 1, o, o + 1],
        }
    }

    /// Clock positions the right ear is allowed to stand for.
    pub fn right_ear_range(&self) -> Vec<u32> {
        match self.right_ear {
            6 => vec![5, 6],
            12 => vec![12, 1],
            1 => vec![12, 1, 2],
            11 => vec![11, 12],
            o => vec![o - 1, o, o + 1],
        }
    }

    /// Whether the ears read as `time`, with either ear as the hour hand.
    pub fn matches(&self, time: &NaiveTime) -> bool {
        let (hour, minute) = clock_positions(time);
        let left = self.left_ear_range();
        let right = self.right_ear_range();

        (left.contains(&hour) && right.contains(&minute))
            || (right.contains(&hour) && left.contains(&minute))
    }
}

/// Positions (1..=12) of the hour and minute hands on a clock face.
pub fn clock_positions(time: &NaiveTime) -> (u32, u32) {
    let hour = match time.hour() % 12 {
        0 => 12,
        h => h,
    };
    // Minutes round half-up to the nearest five-minute mark.
    let minute = match (time.minute() + 2) / 5 {
        0 => 12,
        m => m,
    };
    (hour, minute)
}
