use citytemp_core::ScreenView;

/// Text form of the screen: a loading line, the error line, then the result.
pub fn render_view(view: &ScreenView) -> String {
    let mut out = String::new();

    if view.is_loading {
        out.push_str(&format!("[{}]\n", view.action_label));
    }
    if let Some(error) = &view.error {
        out.push_str(&format!("error: {error}\n"));
    }
    if let Some(result) = &view.result {
        out.push_str(&format!("{}: {}\n", result.city, result.temperature));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use citytemp_core::{ResultView, screen::{ACTION_LABEL, LOADING_LABEL}};

    fn idle() -> ScreenView {
        ScreenView { action_label: ACTION_LABEL, is_loading: false, error: None, result: None }
    }

    #[test]
    fn idle_view_is_blank() {
        assert_eq!(render_view(&idle()), "");
    }

    #[test]
    fn loading_view_shows_indicator() {
        let view = ScreenView { action_label: LOADING_LABEL, is_loading: true, ..idle() };
        assert_eq!(render_view(&view), "[Loading...]\n");
    }

    #[test]
    fn result_view_echoes_city() {
        let view = ScreenView {
            result: Some(ResultView { city: "London".into(), temperature: "18.5°C".into() }),
            ..idle()
        };
        assert_eq!(render_view(&view), "London: 18.5°C\n");
    }

    #[test]
    fn error_precedes_result() {
        let view = ScreenView {
            error: Some("Please enter a city name".into()),
            result: Some(ResultView { city: "Rome".into(), temperature: "25°C".into() }),
            ..idle()
        };
        assert_eq!(render_view(&view), "error: Please enter a city name\nRome: 25°C\n");
    }
}
