use anyhow::{Context, bail};
use gather_core::activity::Activity;
use gather_core::backend::ActivityBackend;
use gather_core::datetime::{format_wire_date, parse_wire_date};
use gather_core::store::ActivityStore;
use tracing::info;

use crate::cli::Command;

pub async fn execute<B: ActivityBackend>(
    store: &ActivityStore<B>,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::List => {
            store.load().await.context("failed to fetch activities")?;
            print_listing(store);
        }
        Command::Add {
            title,
            date,
            description,
            category,
            city,
            venue,
        } => {
            let date = parse_wire_date(&date)
                .with_context(|| format!("invalid date {date:?}, expected e.g. 2025-03-01T18:30:00"))?;
            let activity = Activity::new(title, description, category, date, city, venue);
            let id = activity.id.clone();

            store
                .create(activity)
                .await
                .context("failed to create activity")?;
            info!(%id, "activity created");
            println!("created {id}");
        }
        Command::Edit {
            id,
            title,
            date,
            description,
            category,
            city,
            venue,
        } => {
            store.load().await.context("failed to fetch activities")?;
            store.select_activity(Some(&id));
            let Some(mut activity) = store.selected_activity() else {
                bail!("no activity with id {id}");
            };

            if let Some(title) = title {
                activity.title = title;
            }
            if let Some(date) = date {
                activity.date = parse_wire_date(&date)
                    .with_context(|| format!("invalid date {date:?}"))?;
            }
            if let Some(description) = description {
                activity.description = description;
            }
            if let Some(category) = category {
                activity.category = category;
            }
            if let Some(city) = city {
                activity.city = city;
            }
            if let Some(venue) = venue {
                activity.venue = venue;
            }

            store
                .update(activity)
                .await
                .context("failed to update activity")?;
            println!("updated {id}");
        }
        Command::Delete { id } => {
            store
                .delete(&id)
                .await
                .context("failed to delete activity")?;
            println!("deleted {id}");
        }
    }

    Ok(())
}

fn print_listing<B>(store: &ActivityStore<B>) {
    let activities = store.activities_by_date();
    if activities.is_empty() {
        println!("no activities");
        return;
    }

    for activity in activities {
        let mut place = activity.city.clone();
        if !activity.venue.is_empty() {
            if !place.is_empty() {
                place.push_str(", ");
            }
            place.push_str(&activity.venue);
        }

        println!(
            "{}  {:12}  {:32}  {}  [{}]",
            format_wire_date(activity.date),
            activity.category,
            activity.title,
            place,
            activity.id
        );
    }
}
