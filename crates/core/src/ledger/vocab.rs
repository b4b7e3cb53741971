//! Open vocabularies for the enum-like ledger fields.
//!
//! Account types, partner types, invoice statuses, payment methods and tax
//! types come with a set of well-known values, but users can store anything.
//! Each vocabulary parses the well-known values case-insensitively into their
//! canonical spelling and keeps every other value verbatim in `Other`.

use serde::{Deserialize, Serialize};

macro_rules! open_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Any value outside the well-known set, kept as entered.
            Other(String),
        }

        impl $name {
            /// Parses a value, matching well-known values case-insensitively.
            #[must_use]
            pub fn parse(value: &str) -> Self {
                let trimmed = value.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($text) {
                        return Self::$variant;
                    }
                )+
                Self::Other(trimmed.to_string())
            }

            /// Returns the stored spelling.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $text, )+
                    Self::Other(value) => value,
                }
            }

            /// Returns true for one of the well-known values.
            #[must_use]
            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }

            /// Returns true if no value was entered.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.as_str().trim().is_empty()
            }

            /// Well-known values in display order.
            #[must_use]
            pub fn known() -> Vec<Self> {
                vec![$( Self::$variant ),+]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::parse(value)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse(s))
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::parse(&raw))
            }
        }
    };
}

open_vocabulary! {
    /// Classification of a chart of accounts entry.
    AccountType {
        /// Resources owned.
        Asset => "Asset",
        /// Obligations owed.
        Liability => "Liability",
        /// Owner's stake.
        Equity => "Equity",
        /// Income earned.
        Revenue => "Revenue",
        /// Costs incurred.
        Expense => "Expense",
    }
}

open_vocabulary! {
    /// Relationship with a business partner.
    PartnerType {
        /// Supplies goods or services.
        Vendor => "Vendor",
        /// Buys goods or services.
        Customer => "Customer",
        /// Other affiliation.
        Associate => "Associate",
    }
}

open_vocabulary! {
    /// Collection status of an invoice.
    InvoiceStatus {
        /// Issued and awaiting payment.
        Pending => "Pending",
        /// Settled.
        Paid => "Paid",
        /// Past its due date.
        Overdue => "Overdue",
    }
}

open_vocabulary! {
    /// How a payment was made.
    PaymentMethod {
        /// Cash.
        Cash => "Cash",
        /// Paper check.
        Check => "Check",
        /// Wire transfer.
        Wire => "Wire",
        /// Card payment.
        CreditCard => "Credit Card",
        /// Bank transfer.
        BankTransfer => "Bank Transfer",
    }
}

open_vocabulary! {
    /// Jurisdiction or kind of a tax rate.
    TaxType {
        /// Federal tax.
        Federal => "Federal",
        /// State tax.
        State => "State",
        /// Local tax.
        Local => "Local",
        /// Sales tax.
        SalesTax => "Sales Tax",
        /// Payroll tax.
        Payroll => "Payroll",
    }
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::BankTransfer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("expense", AccountType::Expense)]
    #[case("  Asset ", AccountType::Asset)]
    #[case("LIABILITY", AccountType::Liability)]
    fn test_account_type_parse_known(#[case] raw: &str, #[case] expected: AccountType) {
        assert_eq!(AccountType::parse(raw), expected);
    }

    #[test]
    fn test_custom_value_is_preserved() {
        let custom = AccountType::parse(" Contra Asset ");
        assert_eq!(custom, AccountType::Other("Contra Asset".to_string()));
        assert!(!custom.is_known());
        assert_eq!(custom.to_string(), "Contra Asset");
    }

    #[test]
    fn test_multi_word_values() {
        assert_eq!(PaymentMethod::parse("credit card"), PaymentMethod::CreditCard);
        assert_eq!(TaxType::parse("SALES TAX"), TaxType::SalesTax);
        assert_eq!(PaymentMethod::BankTransfer.as_str(), "Bank Transfer");
    }

    #[test]
    fn test_blank_detection() {
        assert!(PartnerType::parse("   ").is_blank());
        assert!(!PartnerType::Vendor.is_blank());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(InvoiceStatus::default(), InvoiceStatus::Pending);
        assert_eq!(PaymentMethod::default(), PaymentMethod::BankTransfer);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&InvoiceStatus::Overdue).unwrap();
        assert_eq!(json, "\"Overdue\"");
        let parsed: InvoiceStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(parsed, InvoiceStatus::Paid);
        let custom: InvoiceStatus = serde_json::from_str("\"Disputed\"").unwrap();
        assert_eq!(custom, InvoiceStatus::Other("Disputed".to_string()));
    }

    #[test]
    fn test_known_lists_every_variant() {
        assert_eq!(TaxType::known().len(), 5);
        assert!(TaxType::known().iter().all(TaxType::is_known));
    }
}
