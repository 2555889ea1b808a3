//! Physical keyboard detection

use crate::environment::Environment;

/// User-agent fragments of touch devices that usually lack a keyboard
const TOUCH_DEVICES: [&str; 3] = ["iphone", "ipad", "android"];

/// Whether the device behind `env` likely has a physical keyboard.
///
/// Unknown user agents are assumed to have one.
pub fn likely_with_keyboard(env: &Environment) -> bool {
    let agent = env.user_agent().to_lowercase();
    !TOUCH_DEVICES.iter().any(|device| agent.contains(device))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_agent(agent: &str) -> Environment {
        Environment::new(agent, "Linux x86_64")
    }

    #[test]
    fn test_desktop_agents() {
        assert!(likely_with_keyboard(&with_agent(
            "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0"
        )));
        assert!(likely_with_keyboard(&with_agent("keyux/0.1.0")));
        assert!(likely_with_keyboard(&with_agent("")));
    }

    #[test]
    fn test_touch_agents() {
        assert!(!likely_with_keyboard(&with_agent(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile Safari/537.36"
        )));
        assert!(!likely_with_keyboard(&with_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        )));
        assert!(!likely_with_keyboard(&with_agent(
            "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)"
        )));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(!likely_with_keyboard(&with_agent("ANDROID")));
        assert!(!likely_with_keyboard(&with_agent("aNdRoId")));
    }
}
