use std::io::Write;

use lexi_core::TickOutcome;

use crate::state::AppState;

/// One manual alarm tick
pub async fn tick(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    state.scheduler.on_installed().await?;

    match state.scheduler.handle_alarm().await? {
        TickOutcome::Presented(choice) if choice.is_revision => {
            writeln!(out, "Revised: {}", choice.word)?
        }
        TickOutcome::Presented(choice) => writeln!(out, "New word: {}", choice.word)?,
        TickOutcome::FetchFailed(choice) => {
            writeln!(out, "Could not fetch a definition for {}", choice.word)?
        }
        TickOutcome::CatalogExhausted => {
            writeln!(out, "All words from the list have been learned.")?
        }
        TickOutcome::QuotaReached => writeln!(out, "Daily word goal reached.")?,
    }
    Ok(())
}

pub async fn current(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    match state.scheduler.current_word().await? {
        Some(word) => {
            writeln!(out, "{}", word.word)?;
            if !word.phonetic.is_empty() {
                writeln!(out, "{}", word.phonetic)?;
            }
            writeln!(out, "{}", word.definition)?;
        }
        None => writeln!(
            out,
            "No word fetched yet. Please wait for the next notification."
        )?,
    }
    Ok(())
}

pub async fn goal(state: &AppState, goal: Option<u32>, out: &mut impl Write) -> anyhow::Result<()> {
    let quota = state.scheduler.quota();

    if let Some(goal) = goal {
        quota.set_daily_goal(goal).await?;
        tracing::info!("Daily goal set to {}", goal);
        writeln!(out, "Options saved.")?;
    } else {
        writeln!(out, "{}", quota.daily_goal().await?)?;
    }
    Ok(())
}

pub async fn status(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    let status = state.scheduler.status().await?;
    let last_shown = status
        .quota
        .last_shown_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "never".to_string());

    writeln!(
        out,
        "Today:        {}/{} words ({})",
        status.quota.words_shown_today, status.quota.daily_goal, last_shown
    )?;
    writeln!(out, "Seen:         {} of {}", status.seen, status.catalog_size)?;
    writeln!(out, "Due revision: {}", status.due_for_revision)?;
    writeln!(out, "Remaining:    {}", status.remaining)?;
    Ok(())
}
