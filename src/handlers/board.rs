use crate::models::board::{BoardView, DayBoard};
use crate::schedule::correction::ClockTime;
use crate::schedule::window::DateWindow;
use crate::state::AppState;

/// Board as of the last clock tick.
///
/// Before the first successful refresh both days are empty and `loaded` is
/// false.
pub async fn board_view(state: &AppState) -> BoardView {
    let now = state.clock.displayed();
    let current_time = ClockTime::from(now.time());
    let location = &state.config.location;

    match state.store.get(&location.code).await {
        Some(snapshot) => BoardView {
            location: location.name.clone(),
            current_time: current_time.to_string(),
            loaded: true,
            refreshed_at: Some(snapshot.refreshed_at),
            today: snapshot.today_at(current_time),
            tomorrow: snapshot.tomorrow(),
        },
        None => {
            let window = DateWindow::at(&now);
            BoardView {
                location: location.name.clone(),
                current_time: current_time.to_string(),
                loaded: false,
                refreshed_at: None,
                today: DayBoard::new(window.today, Vec::new()),
                tomorrow: DayBoard::new(window.tomorrow, Vec::new()),
            }
        }
    }
}
