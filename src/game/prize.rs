/// Label for a 0-based winner rank.
pub fn prize_label(rank: usize) -> String {
    const ORDINALS: [&str; 3] = ["1st", "2nd", "3rd"];
    match ORDINALS.get(rank) {
        Some(ord) => format!("{ord} Prize"),
        None => format!("{}th Prize", rank + 1),
    }
}
