use chrono::NaiveDateTime;

use crate::model::event::CalendarEvent;

/// A calendar event with its resolved position on the day's time axis
#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock {
    pub event: CalendarEvent,
    /// 0-based visual column within the event's overlap cluster
    pub lane: usize,
    /// Total lanes in the event's cluster; the renderer divides the column
    /// width by this, so disjoint events keep `lanes == 1` and render full
    /// width
    pub lanes: usize,
}

/// Resolve temporal overlaps among one day's events into visual lanes.
///
/// Events are half-open intervals `[start, end)`: touching endpoints do not
/// conflict, and an inverted interval is clamped to zero duration rather
/// than rejected (layout is cosmetic, not data integrity). The sweep places
/// events in start order (ties: longer duration first, then input order)
/// into the lowest lane whose occupant has ended. Lane totals are computed
/// per connected overlap cluster, so a cluster of k mutually-overlapping
/// events uses exactly k lanes and identical input always produces identical
/// output.
///
/// Blocks are returned in sweep order (start ascending).
pub fn layout_day(events: &[CalendarEvent]) -> Vec<EventBlock> {
    // Clamped intervals in deterministic sweep order
    let mut order: Vec<(usize, NaiveDateTime, NaiveDateTime)> = events
        .iter()
        .enumerate()
        .map(|(idx, event)| (idx, event.start, event.end.max(event.start)))
        .collect();
    order.sort_by(|a, b| {
        a.1.cmp(&b.1)
            .then(b.2.cmp(&a.2)) // longer interval first on equal start
            .then(a.0.cmp(&b.0))
    });

    let mut blocks: Vec<EventBlock> = Vec::with_capacity(events.len());
    // One entry per lane: end instant of the current occupant, None if free
    let mut lane_ends: Vec<Option<NaiveDateTime>> = Vec::new();
    // Block indices of the open cluster, and its highest lane so far
    let mut cluster: Vec<usize> = Vec::new();
    let mut cluster_max_lane = 0;

    for (idx, start, end) in order {
        // Expire occupants whose interval has ended at this start instant
        for slot in lane_ends.iter_mut() {
            if slot.is_some_and(|occupant_end| occupant_end <= start) {
                *slot = None;
            }
        }

        // No active occupants left: the previous cluster is maximal
        if lane_ends.iter().all(Option::is_none) {
            close_cluster(&mut blocks, &mut cluster, &mut cluster_max_lane);
            lane_ends.clear();
        }

        let lane = match lane_ends.iter().position(Option::is_none) {
            Some(free) => free,
            None => {
                lane_ends.push(None);
                lane_ends.len() - 1
            }
        };
        lane_ends[lane] = Some(end);
        cluster_max_lane = cluster_max_lane.max(lane);
        cluster.push(blocks.len());
        blocks.push(EventBlock {
            event: events[idx].clone(),
            lane,
            lanes: 0, // patched when the cluster closes
        });
    }

    close_cluster(&mut blocks, &mut cluster, &mut cluster_max_lane);
    blocks
}

fn close_cluster(blocks: &mut [EventBlock], cluster: &mut Vec<usize>, max_lane: &mut usize) {
    if cluster.is_empty() {
        return;
    }
    let lanes = *max_lane + 1;
    for &index in cluster.iter() {
        blocks[index].lanes = lanes;
    }
    cluster.clear();
    *max_lane = 0;
}
