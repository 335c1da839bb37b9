//! Home panel: headline metrics, monthly trend and leaderboards.
//!
//! All figures are static presentation data; nothing here holds state.

#[cfg(test)]
#[path = "dashboard_home_test.rs"]
mod dashboard_home_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug)]
struct MetricCard {
    title: &'static str,
    value: &'static str,
}

#[derive(Clone, Copy, Debug)]
struct TrendBar {
    month: &'static str,
    height_pct: u8,
}

#[derive(Clone, Copy, Debug)]
struct Leaderboard {
    title: &'static str,
    rows: &'static [(&'static str, &'static str)],
}

const METRICS: &[MetricCard] = &[
    MetricCard { title: "Total Users", value: "12,540" },
    MetricCard { title: "Total Merchants", value: "620" },
    MetricCard { title: "Total Due Amount", value: "৳ 41.2M" },
    MetricCard { title: "Active Loans", value: "4,312" },
];

const TREND_TICK_STEP: u32 = 300;
const TREND_TICK_MAX: u32 = 1500;

const TREND: &[TrendBar] = &[
    TrendBar { month: "Jan", height_pct: 60 },
    TrendBar { month: "Feb", height_pct: 45 },
    TrendBar { month: "Mar", height_pct: 70 },
    TrendBar { month: "Apr", height_pct: 80 },
    TrendBar { month: "May", height_pct: 95 },
];

const LEADERBOARDS: &[Leaderboard] = &[
    Leaderboard {
        title: "Top Users",
        rows: &[
            ("Rahim Uddin", "৳ 98,000"),
            ("Salma Akter", "৳ 87,500"),
            ("Hasan Ali", "৳ 76,200"),
            ("Tarek Mahmud", "৳ 45,000"),
        ],
    },
    Leaderboard {
        title: "Top Merchants",
        rows: &[
            ("Maa Pharmacy", "৳ 1.2M"),
            ("Daily Needs Store", "৳ 940K"),
            ("Healthy Life Mart", "৳ 820K"),
        ],
    },
    Leaderboard {
        title: "Bank-wise Loan Received",
        rows: &[("BRAC Bank", "৳ 18.5M"), ("Dutch-Bangla", "৳ 13.2M"), ("City Bank", "৳ 9.5M")],
    },
    Leaderboard {
        title: "Top Products",
        rows: &[
            ("Milk Powder", "2.5K Units"),
            ("Infant Formula", "1.8K Units"),
            ("Insulin & Meds", "1.2K Units"),
        ],
    },
];

/// Podium styling for 1-based `rank`.
fn rank_class(rank: usize) -> &'static str {
    match rank {
        1 => "rank-1",
        2 => "rank-2",
        3 => "rank-3",
        _ => "rank-other",
    }
}

/// Y-axis labels, top to bottom.
fn trend_ticks() -> Vec<u32> {
    (0..=TREND_TICK_MAX / TREND_TICK_STEP)
        .rev()
        .map(|i| i * TREND_TICK_STEP)
        .collect()
}

#[component]
pub fn DashboardHome() -> impl IntoView {
    view! {
        <div class="dashboard-content">
            <div class="cards">
                {METRICS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="card">
                                <h4>{card.title}</h4>
                                <p>{card.value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="chart">
                <h4>"Monthly Transaction Trend"</h4>
                <div class="chart-container">
                    <div class="y-axis">
                        {trend_ticks().into_iter().map(|tick| view! { <span>{tick}</span> }).collect_view()}
                    </div>
                    <div class="bars">
                        {TREND
                            .iter()
                            .map(|bar| {
                                view! {
                                    <div class="bar" style:height=format!("{}%", bar.height_pct)>
                                        <span>{bar.month}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="sections">
                {LEADERBOARDS.iter().map(|board| view! { <LeaderboardSection board=*board/> }).collect_view()}
            </div>

            <footer class="dashboard-footer">"© 2025 All Rights Reserved"</footer>
        </div>
    }
}

#[component]
fn LeaderboardSection(board: Leaderboard) -> impl IntoView {
    view! {
        <div class="section">
            <h4>{board.title}</h4>
            <div class="leaderboard-list">
                {board
                    .rows
                    .iter()
                    .enumerate()
                    .map(|(i, (name, value))| {
                        let rank = i + 1;
                        view! {
                            <div class=format!("leaderboard-item {}", rank_class(rank))>
                                <div class="rank-info">
                                    <div class="rank-badge">{rank}</div>
                                    <div class="item-name">{*name}</div>
                                </div>
                                <div class="item-value">{*value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
