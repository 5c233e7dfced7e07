use crate::domain::{OwnerDraft, OwnerId, PropertyDraft, PropertyId};
use crate::property_registry::PropertyFilter;

use super::error::CommandError;
use super::price::PriceParser;

pub const ADD_OWNER_USAGE: &str = "add_owner <NationalID> <Name> <PhoneNumber>";
pub const DEL_OWNER_USAGE: &str = "del_owner <OwnerID>";
pub const ADD_PROP_USAGE: &str = "add_prop <Name> <Price> <Type> <Area> <Address> <OwnerID>";
pub const DEL_PROP_USAGE: &str = "del_prop <PropertyID>";

pub const HELP: [&str; 8] = [
    "Available commands:",
    "  help",
    "  add_owner <NationalID> <Name> <Phone Number>",
    "  del_owner <OwnerID>",
    "  add_prop <Name> <Price> <Type: rent | sell> <Area> <Address> <OwnerID>",
    "  del_prop <PropertyID>",
    "  print_owners",
    "  print_props [-type <rent|sell>] [-minarea/-min_area <Area>] [-maxarea/-max_area <Area>] [-name <Name>] [-address <Address>]",
];

/// A fully validated command, ready to run against the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    AddOwner(OwnerDraft),
    DelOwner(OwnerId),
    AddProp(PropertyDraft),
    DelProp(PropertyId),
    PrintOwners,
    PrintProps(PropertyFilter),
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines. Every argument is validated here, so
    /// a returned [`Command`] can be applied without further checks.
    pub fn parse(line: &str, prices: &PriceParser) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, args) = line.split_once(' ').unwrap_or((line, ""));
        let command = match name {
            "help" => Command::Help,
            "add_owner" => parse_add_owner(args)?,
            "del_owner" => parse_del_owner(args)?,
            "add_prop" => parse_add_prop(args, prices)?,
            "del_prop" => parse_del_prop(args)?,
            "print_owners" => Command::PrintOwners,
            "print_props" => Command::PrintProps(parse_filter(args)),
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn tokenize(args: &str) -> Vec<&str> {
    args.split(' ').filter(|token| !token.is_empty()).collect()
}

fn expect_args<'a, const N: usize>(args: &'a str, usage: &'static str) -> Result<[&'a str; N], CommandError> {
    tokenize(args)
        .try_into()
        .map_err(|_| CommandError::IncorrectArguments { usage })
}

fn parse_add_owner(args: &str) -> Result<Command, CommandError> {
    let [national_id, name, phone_number] = expect_args::<3>(args, ADD_OWNER_USAGE)?;
    Ok(Command::AddOwner(OwnerDraft::new(national_id, name, phone_number)))
}

fn parse_del_owner(args: &str) -> Result<Command, CommandError> {
    let [owner_id] = expect_args::<1>(args, DEL_OWNER_USAGE)?;
    let owner_id = owner_id.parse().map_err(|_| CommandError::InvalidOwnerId)?;
    Ok(Command::DelOwner(OwnerId(owner_id)))
}

fn parse_add_prop(args: &str, prices: &PriceParser) -> Result<Command, CommandError> {
    let [name, price, kind, area, address, owner_id] = expect_args::<6>(args, ADD_PROP_USAGE)?;

    let area = area.parse().map_err(|_| CommandError::InvalidArea)?;
    let owner_id = owner_id.parse().map_err(|_| CommandError::InvalidOwnerId)?;
    let price = prices.parse(price).ok_or(CommandError::InvalidPrice)?;

    Ok(Command::AddProp(PropertyDraft::new(
        name,
        price,
        kind,
        area,
        address,
        OwnerId(owner_id),
    )))
}

fn parse_del_prop(args: &str) -> Result<Command, CommandError> {
    let [property_id] = expect_args::<1>(args, DEL_PROP_USAGE)?;
    let property_id = property_id.parse().map_err(|_| CommandError::InvalidPropertyId)?;
    Ok(Command::DelProp(PropertyId(property_id)))
}

/// Collects `print_props` flags. Unknown tokens and bad area values are
/// ignored, and a flag in last position has no value to consume.
fn parse_filter(args: &str) -> PropertyFilter {
    let tokens = tokenize(args);
    let mut filter = PropertyFilter::default();

    let mut i = 0;
    while i + 1 < tokens.len() {
        let value = tokens[i + 1];
        let consumed = match tokens[i] {
            "-type" => {
                filter.kind = Some(value.to_string());
                true
            }
            "-minarea" | "-min_area" => {
                if let Ok(min) = value.parse() {
                    filter.min_area = Some(min);
                }
                true
            }
            "-maxarea" | "-max_area" => {
                if let Ok(max) = value.parse() {
                    filter.max_area = Some(max);
                }
                true
            }
            "-name" => {
                filter.name = Some(value.to_string());
                true
            }
            "-address" => {
                filter.address = Some(value.to_string());
                true
            }
            _ => false,
        };
        i += if consumed { 2 } else { 1 };
    }
    filter
}
