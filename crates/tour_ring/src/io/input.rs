use std::{fs, io::Read, path::Path};

use crate::{Error, Point, Result};

/// Reads points from `path`, or from stdin when no path is given.
pub fn read_points(path: Option<&Path>) -> Result<Vec<Point>> {
    let input = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            Error::invalid_input(format!("failed to read input {}: {e}", path.display()))
        })?,
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            input
        }
    };
    parse_points(&input)
}

/// Parses whitespace-separated `x,y` tokens.
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (idx, tok) in input.split_whitespace().enumerate() {
        let mut it = tok.split(',');
        let x_s = it
            .next()
            .ok_or_else(|| Error::invalid_input(format!("Token {}: missing x", idx + 1)))?;
        let y_s = it
            .next()
            .ok_or_else(|| Error::invalid_input(format!("Token {}: missing y", idx + 1)))?;

        if it.next().is_some() {
            return Err(Error::invalid_input(format!(
                "Token {}: expected 'x,y' but got extra comma fields: {tok}",
                idx + 1
            )));
        }

        let x: f64 = x_s
            .parse()
            .map_err(|_| Error::invalid_input(format!("Token {}: invalid x: {x_s}", idx + 1)))?;
        let y: f64 = y_s
            .parse()
            .map_err(|_| Error::invalid_input(format!("Token {}: invalid y: {y_s}", idx + 1)))?;

        let point = Point::new(x, y);
        if !point.is_valid() {
            return Err(Error::invalid_input(format!(
                "Token {}: coordinates must be finite: {tok}",
                idx + 1
            )));
        }
        points.push(point);
    }

    if points.is_empty() {
        return Err(Error::invalid_input("No points provided."));
    }

    log::debug!("input: parsed n={}", points.len());
    Ok(points)
}
