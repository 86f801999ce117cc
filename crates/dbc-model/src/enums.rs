//! Closed vocabularies used by script attributes.
//!
//! Every enum here maps one-to-one onto the literal strings accepted by the
//! installer. `as_str` yields the wire literal; `FromStr` accepts it back,
//! ignoring surrounding whitespace and ASCII case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Declares a wire-literal enum. The first variant is the `Default`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(#[$first_meta:meta])*
            $first:ident => $first_lit:literal
            $(, $(#[$vmeta:meta])* $variant:ident => $lit:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[$first_meta])*
            #[default]
            #[serde(rename = $first_lit)]
            $first,
            $(
                $(#[$vmeta])*
                #[serde(rename = $lit)]
                $variant,
            )*
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$name::$first $(, $name::$variant)*];

            /// Returns the literal written to the script.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::$first => $first_lit,
                    $($name::$variant => $lit,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| ModelError::UnknownLiteral {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

wire_enum! {
    /// Which databases of a multitenant installation a script targets.
    pub enum Context {
        Master => "master",
        Landlord => "landlord",
        Tenants => "tenants",
        All => "all",
    }
}

wire_enum! {
    /// Primitive attribute types.
    pub enum MaxType {
        Aln => "ALN",
        Upper => "UPPER",
        Lower => "LOWER",
        Integer => "INTEGER",
        SmallInt => "SMALLINT",
        BigInt => "BIGINT",
        Decimal => "DECIMAL",
        Float => "FLOAT",
        Amount => "AMOUNT",
        Duration => "DURATION",
        Date => "DATE",
        DateTime => "DATETIME",
        Time => "TIME",
        /// Yes-or-no flag.
        Yorn => "YORN",
        LongAln => "LONGALN",
        Clob => "CLOB",
        Blob => "BLOB",
        /// General-ledger account.
        Gl => "GL",
        Crypto => "CRYPTO",
        CryptoX => "CRYPTOX",
    }
}

impl MaxType {
    /// True for types whose values carry a decimal scale.
    pub fn has_scale(&self) -> bool {
        matches!(self, MaxType::Decimal | MaxType::Amount | MaxType::Float)
    }
}

wire_enum! {
    /// Data-isolation level of a table.
    pub enum TableType {
        System => "system",
        Site => "site",
        Organization => "organization",
        OrgAppFilter => "orgappfilter",
        OrgSite => "orgsite",
        SiteOrg => "siteorg",
        SiteAppFilter => "siteappfilter",
        SetId => "setid",
        ItemSet => "itemset",
        CompanySet => "companyset",
    }
}

wire_enum! {
    /// Where a table's rows live in a multitenant installation.
    pub enum StorageType {
        Tenant => "tenant",
        System => "system",
        Master => "master",
        Template => "template",
        SystemResource => "system_resource",
    }
}

wire_enum! {
    pub enum SearchType {
        Wildcard => "WILDCARD",
        Exact => "EXACT",
        Text => "TEXT",
        NoSearch => "NONE",
    }
}

wire_enum! {
    /// Which application menu a menu definition populates.
    pub enum MenuType {
        AppMenu => "appmenu",
        AppTool => "apptool",
        Search => "search",
    }
}

wire_enum! {
    /// Application tabs on which a menu entry is shown.
    pub enum TabDisplay {
        List => "LIST",
        Main => "MAIN",
        All => "ALL",
    }
}

wire_enum! {
    pub enum SecureLevel {
        Private => "PRIVATE",
        Public => "PUBLIC",
        MaxOnly => "MAXONLY",
        Secure => "SECURE",
    }
}

wire_enum! {
    /// Scope at which a system variable holds its value.
    pub enum MaxvarType {
        System => "system",
        Site => "site",
        Organization => "organization",
        InsertSite => "insert_site",
    }
}

wire_enum! {
    /// Database platforms a freeform statement runs on.
    pub enum SqlTarget {
        All => "all",
        Oracle => "oracle",
        SqlServer => "sqlserver",
        Db2 => "db2",
        NotOracle => "not_oracle",
        NotSqlServer => "not_sqlserver",
        NotDb2 => "not_db2",
    }
}
