/// Consecutive edges of a closed tour, ending with the edge from the last
/// location back to the first. Empty for tours shorter than two locations.
pub fn closed_edges(tour: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let closing = match (tour.first(), tour.last()) {
        (Some(&first), Some(&last)) if tour.len() > 1 => Some((last, first)),
        _ => None,
    };

    tour.iter()
        .zip(tour.iter().skip(1))
        .map(|(&a, &b)| (a, b))
        .chain(closing)
}

pub fn format_tour(tour: &[usize]) -> String {
    let mut line: String = tour.iter().map(|&p| p.to_string() + " -> ").collect();
    if let Some(first) = tour.first() {
        line += &first.to_string();
    }
    line
}
