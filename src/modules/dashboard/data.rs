//! Sample records shown on the CRM dashboard.
//!
//! Everything here is static. The constructors are called once at startup
//! and the results are handed to the views, so tests can pass their own.

use chrono::NaiveDate;

use super::tasks::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastKind {
    Goal,
    Pending,
    Revenue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastBar {
    pub name: &'static str,
    pub value: u64,
    pub kind: ForecastKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealTypeYear {
    pub year: &'static str,
    pub pending: u64,
    pub loss: u64,
    pub won: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceMonth {
    pub month: &'static str,
    pub revenue: u64,
    pub expenses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealStatus {
    Won,
    IntroCall,
    Stuck,
    Negotiation,
    NewLead,
}

impl DealStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DealStatus::Won => "Deal Won",
            DealStatus::IntroCall => "Intro Call",
            DealStatus::Stuck => "Stuck",
            DealStatus::Negotiation => "Negotiation",
            DealStatus::NewLead => "New Lead",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representative {
    pub name: &'static str,
    pub initials: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub id: &'static str,
    pub name: &'static str,
    pub last_contacted: NaiveDate,
    pub representative: Representative,
    pub status: DealStatus,
    pub value: &'static str,
}

impl Deal {
    pub fn last_contacted_label(&self) -> String {
        self.last_contacted.format("%b %d, %Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub age: &'static str,
}

/// All sample data for one dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub stats: Vec<StatCard>,
    pub forecast: Vec<ForecastBar>,
    pub deal_types: Vec<DealTypeYear>,
    pub balance: Vec<BalanceMonth>,
    pub deals: Vec<Deal>,
    pub tasks: Vec<Task>,
    pub notifications: Vec<Notification>,
    pub unread_notifications: u32,
}

impl DashboardData {
    pub fn sample() -> Self {
        Self {
            stats: sample_stats(),
            forecast: sample_forecast(),
            deal_types: sample_deal_types(),
            balance: sample_balance(),
            deals: sample_deals(),
            tasks: sample_tasks(),
            notifications: sample_notifications(),
            unread_notifications: 5,
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn sample_stats() -> Vec<StatCard> {
    vec![
        StatCard { title: "Campaign Sent", value: "197", trend: Trend::Positive },
        StatCard { title: "Annual Profit", value: "$489.4k", trend: Trend::Positive },
        StatCard { title: "Lead Conversation", value: "32.89%", trend: Trend::Negative },
        StatCard { title: "Daily Average Income", value: "$1,596.5", trend: Trend::Positive },
        StatCard { title: "Annual Deals", value: "2,659", trend: Trend::Negative },
    ]
}

pub fn sample_forecast() -> Vec<ForecastBar> {
    vec![
        ForecastBar { name: "Goal", value: 37_000, kind: ForecastKind::Goal },
        ForecastBar { name: "Pending Forecast", value: 12_000, kind: ForecastKind::Pending },
        ForecastBar { name: "Revenue", value: 18_000, kind: ForecastKind::Revenue },
    ]
}

pub fn sample_deal_types() -> Vec<DealTypeYear> {
    vec![
        DealTypeYear { year: "2018", pending: 75, loss: 35, won: 90 },
        DealTypeYear { year: "2019", pending: 80, loss: 50, won: 65 },
        DealTypeYear { year: "2020", pending: 55, loss: 70, won: 45 },
        DealTypeYear { year: "2021", pending: 90, loss: 25, won: 85 },
        DealTypeYear { year: "2022", pending: 65, loss: 60, won: 75 },
        DealTypeYear { year: "2023", pending: 40, loss: 45, won: 80 },
    ]
}

pub fn sample_balance() -> Vec<BalanceMonth> {
    let rows = [
        ("Jan", 12_000, 9_000),
        ("Feb", 18_000, 11_000),
        ("Mar", 15_000, 13_000),
        ("Apr", 22_000, 15_000),
        ("May", 20_000, 18_000),
        ("Jun", 28_000, 20_000),
        ("Jul", 32_000, 23_000),
        ("Aug", 30_000, 27_000),
        ("Sep", 40_000, 30_000),
        ("Oct", 38_000, 32_000),
        ("Nov", 45_000, 35_000),
        ("Dec", 52_000, 40_000),
    ];
    rows.into_iter()
        .map(|(month, revenue, expenses)| BalanceMonth { month, revenue, expenses })
        .collect()
}

pub fn sample_deals() -> Vec<Deal> {
    let rep = |name, initials| Representative { name, initials };
    vec![
        Deal {
            id: "1",
            name: "Absternet LLC",
            last_contacted: ymd(2021, 9, 20),
            representative: rep("Donald Risher", "DR"),
            status: DealStatus::Won,
            value: "$100.1K",
        },
        Deal {
            id: "2",
            name: "Raitech Soft",
            last_contacted: ymd(2021, 9, 23),
            representative: rep("Sofia Cunha", "SC"),
            status: DealStatus::IntroCall,
            value: "$150K",
        },
        Deal {
            id: "3",
            name: "William PVT",
            last_contacted: ymd(2021, 9, 27),
            representative: rep("Luis Rocha", "LR"),
            status: DealStatus::Stuck,
            value: "$78.18K",
        },
        Deal {
            id: "4",
            name: "Loiusee LLP",
            last_contacted: ymd(2021, 9, 30),
            representative: rep("Vitoria Rodrigues", "VR"),
            status: DealStatus::Won,
            value: "$180K",
        },
        Deal {
            id: "5",
            name: "Tech Solutions Inc.",
            last_contacted: ymd(2021, 10, 2),
            representative: rep("Michael Brown", "MB"),
            status: DealStatus::Negotiation,
            value: "$220.5K",
        },
        Deal {
            id: "6",
            name: "Innovate Group",
            last_contacted: ymd(2021, 10, 5),
            representative: rep("Jessica Lee", "JL"),
            status: DealStatus::NewLead,
            value: "$95K",
        },
    ]
}

pub fn sample_tasks() -> Vec<Task> {
    let rows = [
        ("1", "Review and make sure nothing slips through cracks", ymd(2021, 9, 15), false),
        ("2", "Send meeting invites for sales upcampaign", ymd(2021, 9, 20), true),
        ("3", "Weekly closed sales won checking with sales team", ymd(2021, 9, 24), false),
        ("4", "Add notes that can be viewed from the individual view", ymd(2021, 9, 27), false),
        ("5", "Move stuff to another page", ymd(2021, 9, 27), true),
        ("6", "Prepare presentation for Q4 results", ymd(2021, 10, 1), false),
        ("7", "Follow up with key client X", ymd(2021, 10, 3), false),
        ("8", "Update CRM with latest interactions", ymd(2021, 10, 5), true),
        ("9", "Plan strategy for new product launch", ymd(2021, 10, 10), false),
        ("10", "Team brainstorming session for new features", ymd(2021, 10, 12), false),
    ];
    rows.into_iter()
        .map(|(id, description, due, completed)| Task::new(id, description, due, completed))
        .collect()
}

pub fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification { title: "New order received", age: "2 min ago" },
        Notification { title: "Another notification here...", age: "" },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceTotals {
    pub revenue: u64,
    pub expenses: u64,
    /// Percent of revenue kept after expenses.
    pub profit_ratio: f64,
}

pub fn balance_totals(months: &[BalanceMonth]) -> BalanceTotals {
    let revenue: u64 = months.iter().map(|m| m.revenue).sum();
    let expenses: u64 = months.iter().map(|m| m.expenses).sum();
    let profit_ratio = if revenue > 0 {
        (revenue as f64 - expenses as f64) / revenue as f64 * 100.0
    } else {
        0.0
    };
    BalanceTotals {
        revenue,
        expenses,
        profit_ratio,
    }
}

/// `$352k` for values of a thousand or more, `$950` below.
pub fn format_currency(value: u64) -> String {
    if value >= 1000 {
        format!("${:.0}k", value as f64 / 1000.0)
    } else {
        format!("${value}")
    }
}
