//! Headless scripted demo
//!
//! Feeds a canned run through the driver and prints the HUD after each
//! step, showing the streak bonus advancing and the two-phase ball loss.
//! Run with `RUST_LOG=debug` to see transition logging.

use smashout::{GameConfig, GameDriver};

fn print_hud(driver: &GameDriver, label: &str) {
    let hud = driver.hud();
    println!(
        "{label:<24} {} | {} | {} | {} | blocks {}",
        hud.lives_text(),
        hud.score_text(),
        hud.bonus_text(),
        hud.streak_text(),
        driver.state().blocks.len()
    );
}

fn main() {
    env_logger::init();

    let mut driver = GameDriver::new(GameConfig::default());
    print_hud(&driver, "start");

    driver.on_pointer_down();
    print_hud(&driver, "launch");

    // A six-hit streak: the bonus advances on the fourth hit
    for key in 0..6 {
        driver.on_block_collision(key);
        print_hud(&driver, &format!("hit block {key}"));
    }

    // The ball drops out; the host signals the exit twice before it
    // finishes snapping the ball back to the paddle
    driver.on_ball_exit();
    print_hud(&driver, "ball exits bottom");
    driver.on_ball_exit();
    print_hud(&driver, "ball exits (repeat)");

    driver.on_pointer_down();
    for key in 6..60 {
        driver.on_block_collision(key);
    }
    print_hud(&driver, "board emptied");

    if let Some(cause) = driver.on_frame() {
        println!("reset: {cause:?}");
    }
    print_hud(&driver, "after reset");
}
