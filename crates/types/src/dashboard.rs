//! Record types backing the dashboard panels.

/// Headline metric displayed as a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatTile {
    pub title: &'static str,
    pub value: &'static str,
    /// Change against the previous period, in percent. Negative means decline.
    pub delta_percent: f32,
}

/// Revenue for one month, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenuePoint {
    pub month: &'static str,
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Invited,
    Suspended,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Invited => "Invited",
            UserStatus::Suspended => "Suspended",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserRecord {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub status: UserStatus,
}

impl UserRecord {
    /// Up to two uppercase initials derived from the name, used in place of an avatar image.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Paid,
    Pending,
    Refunded,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Paid => "Paid",
            OrderStatus::Pending => "Pending",
            OrderStatus::Refunded => "Refunded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: &'static str,
    pub customer: &'static str,
    pub product: &'static str,
    pub amount_cents: u64,
    pub status: OrderStatus,
}

/// Copy for the upgrade call-to-action card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeOffer {
    pub title: &'static str,
    pub body: &'static str,
    pub cta: &'static str,
}

/// Formats an amount in cents as `$1,234.56`.
pub fn format_currency(amount_cents: u64) -> String {
    let dollars = amount_cents / 100;
    let cents = amount_cents % 100;
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.{cents:02}")
}
