//! List commands mirroring the dashboard views
//!
//! Each command prints a plain-text listing, or pretty JSON with `--json`.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use studio_core::dashboard::DashboardSummary;
use studio_core::model::{format_date, format_money};
use studio_core::referrals::{
    pluralize_referrals, referral_pitch, top_referrers, total_referrals, Referrer,
    REFERRAL_DISCOUNT_PERCENT,
};
use studio_core::{
    filter_bookings, filter_clients, filter_galleries, BookingStatus, GalleryStatus,
    StatusFilter,
};

use super::Session;

#[derive(Parser, Debug, Default)]
pub struct JsonArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Default)]
pub struct ClientsArgs {
    /// Keep clients whose name or email contains this text
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Default)]
pub struct GalleriesArgs {
    /// all, editing, ready or delivered
    #[arg(long, default_value = "all")]
    pub status: StatusFilter<GalleryStatus>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Default)]
pub struct BookingsArgs {
    /// all, pending, confirmed, completed or cancelled
    #[arg(long, default_value = "all")]
    pub status: StatusFilter<BookingStatus>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn run_clients(session: &Session, args: &ClientsArgs, out: &mut impl Write) -> Result<()> {
    let query = args.search.as_deref().unwrap_or("");
    let clients = filter_clients(&session.data.clients, query);

    if args.json {
        return write_json(out, &clients);
    }
    if clients.is_empty() {
        writeln!(out, "No clients found")?;
        return Ok(());
    }

    for client in clients {
        write!(
            out,
            "{:<20} {:<30} {:<16} {:>9}",
            client.name,
            client.email,
            client.phone,
            format_money(client.total_spent)
        )?;
        if client.referral_count > 0 {
            write!(out, "  {}", pluralize_referrals(client.referral_count))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn run_galleries(session: &Session, args: &GalleriesArgs, out: &mut impl Write) -> Result<()> {
    let galleries = filter_galleries(&session.data.galleries, args.status);

    if args.json {
        return write_json(out, &galleries);
    }
    if galleries.is_empty() {
        writeln!(out, "No galleries found")?;
        return Ok(());
    }

    for gallery in galleries {
        writeln!(
            out,
            "{:<28} {:<10} {} • {} photos",
            gallery.title,
            gallery.status.label(),
            gallery.client_name,
            gallery.image_count
        )?;
    }
    Ok(())
}

pub fn run_bookings(session: &Session, args: &BookingsArgs, out: &mut impl Write) -> Result<()> {
    let bookings = filter_bookings(&session.data.bookings, args.status);

    if args.json {
        return write_json(out, &bookings);
    }
    if bookings.is_empty() {
        writeln!(out, "No bookings found")?;
        return Ok(());
    }

    let pattern = session.config.ui.date_format.as_str();
    for booking in bookings {
        writeln!(
            out,
            "{:<18} {:<9} {:<18} {:<20} {:<10} {}",
            format_date(booking.date, pattern),
            booking.time,
            booking.client_name,
            booking.package_name,
            booking.status.label(),
            booking.location
        )?;
        if let Some(notes) = &booking.notes {
            writeln!(out, "    {notes}")?;
        }
        if let Some(hint) = booking.reminder_hint() {
            writeln!(out, "    {hint}")?;
        }
    }
    Ok(())
}

pub fn run_packages(session: &Session, args: &JsonArgs, out: &mut impl Write) -> Result<()> {
    let packages = &session.data.packages;

    if args.json {
        return write_json(out, packages);
    }

    for package in packages {
        write!(
            out,
            "{} - {} ({})",
            package.name,
            format_money(package.price),
            package.duration
        )?;
        if package.popular {
            write!(out, "  ★ Most Popular")?;
        }
        writeln!(out)?;
        writeln!(out, "  {}", package.description)?;
        for feature in &package.features {
            writeln!(out, "  - {feature}")?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReferralReport<'a> {
    code: &'a str,
    discount_percent: u8,
    total_referrals: u64,
    top_referrers: Vec<Referrer<'a>>,
}

pub fn run_referrals(session: &Session, args: &JsonArgs, out: &mut impl Write) -> Result<()> {
    let report = ReferralReport {
        code: &session.config.studio.referral_code,
        discount_percent: REFERRAL_DISCOUNT_PERCENT,
        total_referrals: total_referrals(&session.data.clients),
        top_referrers: top_referrers(&session.data.clients),
    };

    if args.json {
        return write_json(out, &report);
    }

    writeln!(out, "Referral code: {}", report.code)?;
    writeln!(out, "{}", referral_pitch())?;
    writeln!(out, "Total referrals: {}", report.total_referrals)?;
    writeln!(out)?;
    for referrer in &report.top_referrers {
        writeln!(
            out,
            "#{} {:<20} {:<14} {} earned",
            referrer.rank,
            referrer.client.name,
            pluralize_referrals(referrer.referrals),
            format_money(referrer.earned)
        )?;
    }
    Ok(())
}

pub fn run_dashboard(session: &Session, args: &JsonArgs, out: &mut impl Write) -> Result<()> {
    let summary = DashboardSummary::build(&session.data);

    if args.json {
        return write_json(out, &summary);
    }

    writeln!(out, "{}", session.config.studio.name)?;
    for card in &summary.cards {
        write!(out, "{:<20} {:>9}", card.title, card.value)?;
        if let Some(trend) = card.trend {
            write!(out, "  +{trend}%")?;
        }
        writeln!(out)?;
    }

    let pattern = session.config.ui.date_format.as_str();
    writeln!(out, "\nUpcoming Bookings")?;
    for booking in summary.recent_bookings {
        writeln!(
            out,
            "  {:<18} {} • {} {}  [{}]",
            booking.client_name,
            booking.package_name,
            format_date(booking.date, pattern),
            booking.time,
            booking.status.label()
        )?;
    }

    writeln!(out, "\nRecent Galleries")?;
    for gallery in summary.recent_galleries {
        writeln!(
            out,
            "  {:<28} {} • {} photos  [{}]",
            gallery.title,
            gallery.client_name,
            gallery.image_count,
            gallery.status.label()
        )?;
    }
    Ok(())
}
