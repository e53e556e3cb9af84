//! Mock datasets rendered by the dashboard.
//!
//! Everything here is a literal constant table; nothing is computed or loaded.

use vista_types::{NavEntry, OrderRecord, OrderStatus, RevenuePoint, StatTile, UpgradeOffer, UserRecord, UserStatus};

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry::leaf("Dashboard", "⌂").marked_active(),
    NavEntry::group(
        "Analytics",
        "◔",
        &[
            NavEntry::leaf("Overview", "▤"),
            NavEntry::leaf("Reports", "▦"),
            NavEntry::leaf("Realtime", "◉").with_badge("Live"),
        ],
    ),
    NavEntry::group(
        "Customers",
        "☺",
        &[
            NavEntry::leaf("All users", "≡").with_badge("1.2k"),
            NavEntry::leaf("Segments", "◫"),
            NavEntry::leaf("Invitations", "✉").with_badge("3"),
        ],
    ),
    NavEntry::group(
        "Commerce",
        "$",
        &[
            NavEntry::leaf("Orders", "▣").with_badge("12"),
            NavEntry::leaf("Products", "◧"),
            NavEntry::leaf("Discounts", "%").with_badge("New"),
        ],
    ),
    NavEntry::leaf("Inbox", "✉").with_badge("4"),
    NavEntry::group(
        "Settings",
        "⚙",
        &[
            NavEntry::leaf("Profile", "☺"),
            NavEntry::leaf("Billing", "$"),
            NavEntry::leaf("Team", "≡"),
        ],
    ),
];

pub const STATS: &[StatTile] = &[
    StatTile {
        title: "Total revenue",
        value: "$45,231.89",
        delta_percent: 20.1,
    },
    StatTile {
        title: "Subscriptions",
        value: "+2,350",
        delta_percent: 180.1,
    },
    StatTile {
        title: "Sales",
        value: "+12,234",
        delta_percent: 19.0,
    },
    StatTile {
        title: "Active now",
        value: "573",
        delta_percent: -4.3,
    },
];

pub const REVENUE: &[RevenuePoint] = &[
    RevenuePoint { month: "Jan", amount: 4_200 },
    RevenuePoint { month: "Feb", amount: 3_100 },
    RevenuePoint { month: "Mar", amount: 5_600 },
    RevenuePoint { month: "Apr", amount: 4_800 },
    RevenuePoint { month: "May", amount: 2_900 },
    RevenuePoint { month: "Jun", amount: 5_100 },
    RevenuePoint { month: "Jul", amount: 3_700 },
    RevenuePoint { month: "Aug", amount: 4_400 },
    RevenuePoint { month: "Sep", amount: 5_900 },
    RevenuePoint { month: "Oct", amount: 3_300 },
    RevenuePoint { month: "Nov", amount: 4_600 },
    RevenuePoint { month: "Dec", amount: 5_200 },
];

/// Daily unique visitors over the last four weeks.
pub const VISITORS: &[u64] = &[
    320, 410, 380, 460, 520, 300, 280, 350, 440, 470, 510, 560, 330, 290, 370, 450, 480, 530, 590, 340, 310, 400, 490, 520, 570,
    610, 360, 330,
];

pub const USERS: &[UserRecord] = &[
    UserRecord {
        name: "Olivia Martin",
        email: "olivia.martin@email.com",
        role: "Owner",
        status: UserStatus::Active,
    },
    UserRecord {
        name: "Jackson Lee",
        email: "jackson.lee@email.com",
        role: "Admin",
        status: UserStatus::Active,
    },
    UserRecord {
        name: "Isabella Nguyen",
        email: "isabella.nguyen@email.com",
        role: "Member",
        status: UserStatus::Invited,
    },
    UserRecord {
        name: "William Kim",
        email: "will@email.com",
        role: "Member",
        status: UserStatus::Active,
    },
    UserRecord {
        name: "Sofia Davis",
        email: "sofia.davis@email.com",
        role: "Billing",
        status: UserStatus::Suspended,
    },
];

pub const ORDERS: &[OrderRecord] = &[
    OrderRecord {
        id: "INV-3210",
        customer: "Liam Johnson",
        product: "Pro plan (annual)",
        amount_cents: 25_000,
        status: OrderStatus::Paid,
    },
    OrderRecord {
        id: "INV-3209",
        customer: "Olivia Smith",
        product: "Team seats x5",
        amount_cents: 15_000,
        status: OrderStatus::Pending,
    },
    OrderRecord {
        id: "INV-3208",
        customer: "Noah Williams",
        product: "Starter plan",
        amount_cents: 3_500,
        status: OrderStatus::Paid,
    },
    OrderRecord {
        id: "INV-3207",
        customer: "Emma Brown",
        product: "Pro plan (monthly)",
        amount_cents: 4_500,
        status: OrderStatus::Refunded,
    },
    OrderRecord {
        id: "INV-3206",
        customer: "Ava Garcia",
        product: "Enterprise add-on",
        amount_cents: 199_900,
        status: OrderStatus::Paid,
    },
    OrderRecord {
        id: "INV-3205",
        customer: "Mason Miller",
        product: "Team seats x2",
        amount_cents: 6_000,
        status: OrderStatus::Pending,
    },
];

pub const UPGRADE_OFFER: UpgradeOffer = UpgradeOffer {
    title: "Upgrade to Pro",
    body: "Unlock unlimited dashboards, realtime analytics and priority support.",
    cta: "Upgrade now",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_fixture_is_two_levels_deep() {
        for entry in NAV_ENTRIES {
            for child in entry.children {
                assert!(child.is_leaf(), "{} should be a leaf", child.label);
            }
        }
    }

    #[test]
    fn exactly_one_entry_is_active() {
        let active = NAV_ENTRIES
            .iter()
            .flat_map(|entry| std::iter::once(entry).chain(entry.children.iter()))
            .filter(|entry| entry.active)
            .count();
        assert_eq!(active, 1);
    }

    #[test]
    fn order_ids_are_unique() {
        let ids: HashSet<&str> = ORDERS.iter().map(|order| order.id).collect();
        assert_eq!(ids.len(), ORDERS.len());
    }
}
