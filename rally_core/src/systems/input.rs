use crate::components::{Paddle, Side};
use crate::resources::{KeyPriority, VerticalKey};
use crate::services::{InputSource, Key};
use glam::Vec2;
use hecs::World;

/// Resolve the held Up/Down keys into a single winner. Holding both keys
/// gives control to the most recent press; releasing it hands control back
/// to the older key rather than stopping the paddle.
pub fn resolve_vertical(
    up_held: bool,
    down_held: bool,
    priority: &mut KeyPriority,
) -> Option<VerticalKey> {
    match (up_held, down_held) {
        (false, false) => {
            priority.active = None;
            None
        }
        (true, false) => {
            priority.active = Some(VerticalKey::Up);
            priority.active
        }
        (false, true) => {
            priority.active = Some(VerticalKey::Down);
            priority.active
        }
        // Both held: the remembered key is the older press, so the other
        // one wins. The memory itself is left alone for the revert.
        (true, true) => match priority.active {
            Some(VerticalKey::Up) => Some(VerticalKey::Down),
            _ => Some(VerticalKey::Up),
        },
    }
}

/// Sample the input service and point the player paddle's versor
pub fn apply_player_input(world: &mut World, input: &dyn InputSource, priority: &mut KeyPriority) {
    let winner = resolve_vertical(input.is_down(Key::Up), input.is_down(Key::Down), priority);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Left {
            continue;
        }
        paddle.dir = match winner {
            Some(VerticalKey::Up) => Vec2::new(0.0, -1.0),
            Some(VerticalKey::Down) => Vec2::new(0.0, 1.0),
            None => Vec2::ZERO,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_key_wins_and_is_remembered() {
        let mut priority = KeyPriority::default();

        assert_eq!(
            resolve_vertical(true, false, &mut priority),
            Some(VerticalKey::Up)
        );
        assert_eq!(priority.active, Some(VerticalKey::Up));

        assert_eq!(
            resolve_vertical(false, true, &mut priority),
            Some(VerticalKey::Down)
        );
        assert_eq!(priority.active, Some(VerticalKey::Down));
    }

    #[test]
    fn test_no_keys_clears_the_memory() {
        let mut priority = KeyPriority {
            active: Some(VerticalKey::Up),
        };
        assert_eq!(resolve_vertical(false, false, &mut priority), None);
        assert_eq!(priority.active, None);
    }

    #[test]
    fn test_later_press_wins_while_both_are_held() {
        let mut priority = KeyPriority::default();

        // Down first, then Up joins: Up is the newer press
        resolve_vertical(false, true, &mut priority);
        assert_eq!(
            resolve_vertical(true, true, &mut priority),
            Some(VerticalKey::Up)
        );
        assert_eq!(
            priority.active,
            Some(VerticalKey::Down),
            "Memory keeps the older press"
        );
    }

    #[test]
    fn test_releasing_the_later_press_reverts() {
        let mut priority = KeyPriority::default();

        resolve_vertical(false, true, &mut priority); // Down held
        resolve_vertical(true, true, &mut priority); // Up joins, Up drives
        assert_eq!(
            resolve_vertical(false, true, &mut priority),
            Some(VerticalKey::Down),
            "Releasing the newer key hands control back, not to neutral"
        );
    }

    #[test]
    fn test_both_pressed_with_no_memory_defaults_to_up() {
        let mut priority = KeyPriority::default();
        assert_eq!(
            resolve_vertical(true, true, &mut priority),
            Some(VerticalKey::Up)
        );
    }

    #[test]
    fn test_player_paddle_versor_follows_the_winner() {
        struct Held {
            up: bool,
            down: bool,
        }
        impl InputSource for Held {
            fn is_down(&self, key: Key) -> bool {
                match key {
                    Key::Up => self.up,
                    Key::Down => self.down,
                    Key::Reset => false,
                }
            }
            fn just_pressed(&self, _key: Key) -> bool {
                false
            }
        }

        let mut world = World::new();
        let config = crate::config::Config::new();
        world.spawn((Paddle::new(
            Side::Left,
            config.paddle_origin(Side::Left),
            config.paddle_size(),
            config.paddle_speed,
        ),));
        let mut priority = KeyPriority::default();

        apply_player_input(
            &mut world,
            &Held {
                up: true,
                down: false,
            },
            &mut priority,
        );
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.dir, Vec2::new(0.0, -1.0));
        }

        apply_player_input(
            &mut world,
            &Held {
                up: false,
                down: false,
            },
            &mut priority,
        );
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.dir, Vec2::ZERO);
        }
    }
}
