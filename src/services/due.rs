//! Inspection due-date computation
//!
//! An item's next inspection is `reference_date + interval`, where the
//! reference date is its most recent inspection (or its commissioning date
//! when it was never inspected) and the interval is the item's own override
//! when positive, else its type's default. Items missing either value have no
//! due date and are never reported as due.
//!
//! An item is due when `days_remaining <= threshold`; the bound is inclusive.

use chrono::{Duration, NaiveDate};

use crate::models::{
    equipment::Equipment,
    schedule::{DueEquipment, DueSummary, InspectionSchedule, Urgency},
};

/// Date the next interval is counted from
pub fn reference_date(equipment: &Equipment) -> Option<NaiveDate> {
    equipment.last_inspection_date.or(equipment.commissioning_date)
}

/// Interval that applies to the item, `None` when no positive interval exists
pub fn effective_interval(equipment: &Equipment) -> Option<i32> {
    equipment
        .inspection_interval_days
        .filter(|days| *days > 0)
        .or(Some(equipment.equipment_type.inspection_interval_days))
        .filter(|days| *days > 0)
}

pub fn next_due_date(reference: NaiveDate, interval_days: i32) -> Option<NaiveDate> {
    reference.checked_add_signed(Duration::days(i64::from(interval_days)))
}

/// Whole calendar days from `today` to `due`, negative when overdue
pub fn days_remaining(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

pub fn is_due(days_remaining: i64, threshold_days: i64) -> bool {
    days_remaining <= threshold_days
}

/// Bucket used by the dashboard, independent of the due threshold
pub fn classify(days_remaining: i64, upcoming_window_days: i64) -> Urgency {
    if days_remaining < 0 {
        Urgency::Overdue
    } else if days_remaining <= upcoming_window_days {
        Urgency::Upcoming
    } else {
        Urgency::Current
    }
}

/// Compute the schedule of an item, `None` when it has no computable due date
pub fn schedule(
    equipment: &Equipment,
    today: NaiveDate,
    upcoming_window_days: i64,
) -> Option<InspectionSchedule> {
    let reference = reference_date(equipment)?;
    let interval_days = effective_interval(equipment)?;
    let next_due = next_due_date(reference, interval_days)?;
    let remaining = days_remaining(next_due, today);

    Some(InspectionSchedule {
        reference_date: reference,
        interval_days,
        next_due_date: next_due,
        days_remaining: remaining,
        urgency: classify(remaining, upcoming_window_days),
    })
}

/// Keep the items due within `threshold_days`, most urgent first
pub fn due_list(
    equipment: Vec<Equipment>,
    today: NaiveDate,
    threshold_days: i64,
    upcoming_window_days: i64,
) -> Vec<DueEquipment> {
    let mut due: Vec<DueEquipment> = equipment
        .into_iter()
        .filter_map(|item| {
            let schedule = schedule(&item, today, upcoming_window_days)?;
            is_due(schedule.days_remaining, threshold_days).then_some(DueEquipment {
                equipment: item,
                schedule,
            })
        })
        .collect();

    due.sort_by(|a, b| {
        a.schedule
            .days_remaining
            .cmp(&b.schedule.days_remaining)
            .then(a.equipment.id.cmp(&b.equipment.id))
    });
    due
}

pub fn summarize(due: &[DueEquipment], threshold_days: i64) -> DueSummary {
    let mut summary = DueSummary {
        threshold_days,
        total: due.len(),
        ..DueSummary::default()
    };
    for item in due {
        match item.schedule.urgency {
            Urgency::Overdue => summary.overdue += 1,
            Urgency::Upcoming => summary.upcoming += 1,
            Urgency::Current => summary.current += 1,
        }
    }
    summary
}
