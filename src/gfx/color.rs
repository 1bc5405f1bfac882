// This file is part of stardrift.
// Copyright (c) 2025-2026 the stardrift project developers. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

const CHANNEL_LOW: i16 = 50;
const CHANNEL_HIGH: i16 = 240;

#[derive(Copy, Clone, Debug, PartialEq)]
struct Channel {
    value: i16,
    direction: i16,
}

impl Channel {
    fn new(value: u8) -> Channel {
        Channel {
            value: i16::from(value).max(CHANNEL_LOW).min(CHANNEL_HIGH),
            direction: 1,
        }
    }

    // Invariant: value stays in [CHANNEL_LOW, CHANNEL_HIGH], direction is +-1.
    fn advance(self, step: i16) -> Channel {
        let value = self.value + self.direction * step;
        let direction = if value <= CHANNEL_LOW || value >= CHANNEL_HIGH {
            -self.direction
        } else {
            self.direction
        };
        Channel {
            value: value.max(CHANNEL_LOW).min(CHANNEL_HIGH),
            direction,
        }
    }
}

/// Color whose channels oscillate between fixed bounds, one step per call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pulse {
    channels: [Channel; 3],
    step: i16,
}

impl Pulse {
    pub fn new(rgb: (u8, u8, u8), step: i16) -> Pulse {
        Pulse {
            channels: [Channel::new(rgb.0), Channel::new(rgb.1), Channel::new(rgb.2)],
            step,
        }
    }

    pub fn advance(self) -> Pulse {
        let mut channels = self.channels;
        for channel in channels.iter_mut() {
            *channel = channel.advance(self.step);
        }
        Pulse { channels, ..self }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            self.channels[0].value as u8,
            self.channels[1].value as u8,
            self.channels[2].value as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_stay_bounded() {
        let mut pulse = Pulse::new((50, 120, 200), 7);
        for _ in 0..1000 {
            pulse = pulse.advance();
            let (r, g, b) = pulse.rgb();
            for value in [r, g, b].iter() {
                assert!(*value >= 50 && *value <= 240);
            }
        }
    }

    #[test]
    fn direction_flips_at_upper_bound() {
        let channel = Channel {
            value: 239,
            direction: 1,
        };
        let stepped = channel.advance(2);
        assert_eq!(240, stepped.value);
        assert_eq!(-1, stepped.direction);
    }

    #[test]
    fn direction_flips_at_lower_bound() {
        let channel = Channel {
            value: 51,
            direction: -1,
        };
        let stepped = channel.advance(2);
        assert_eq!(50, stepped.value);
        assert_eq!(1, stepped.direction);
    }

    #[test]
    fn direction_holds_between_bounds() {
        let channel = Channel {
            value: 100,
            direction: 1,
        };
        let stepped = channel.advance(2);
        assert_eq!(102, stepped.value);
        assert_eq!(1, stepped.direction);
    }

    #[test]
    fn seed_clamped_into_range() {
        let pulse = Pulse::new((0, 255, 120), 1);
        assert_eq!((50, 240, 120), pulse.rgb());
    }

    #[test]
    fn oscillation_revisits_seed() {
        let seed = Pulse::new((100, 100, 100), 1);
        let mut pulse = seed.advance();
        let mut steps = 1;
        while pulse != seed && steps < 1000 {
            pulse = pulse.advance();
            steps += 1;
        }
        assert_eq!(seed, pulse);
    }
}
