//! POV-Ray scene subset parser.
//!
//! The input is split into tokens first, so block layout across lines is
//! free-form. Punctuation (`{ } < > ,`) forms single-character tokens and
//! everything else is separated by whitespace.
//!
//! # Supported Syntax
//!
//! - `camera { location <..> up <..> right <..> look_at <..> }`
//! - `light_source { <x, y, z> color rgb <r, g, b> }`
//! - `sphere { <center>, radius pigment {..} finish {..} }`
//! - `plane { <normal>, distance pigment {..} finish {..} }`
//! - `triangle { <a>, <b>, <c> pigment {..} finish {..} }`
//! - `pigment { color rgb <r, g, b> }` or `color rgbf <r, g, b, f>`
//! - `finish { ambient .. diffuse .. specular .. roughness .. reflection .. refraction .. ior .. }`

use std::collections::VecDeque;

use glint_math::Vec3;
use thiserror::Error;

use super::types::*;
use crate::color::{Finish, Pigment};

/// Errors that can occur during POV parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unexpected end of file")]
    UnexpectedEof,

    #[error("Invalid number '{token}' at line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("Unclosed block starting at line {0}")]
    UnclosedBlock(usize),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

const PUNCTUATION: [char; 5] = ['{', '}', '<', '>', ','];

/// Split content into `(line, token)` pairs, dropping comments.
fn tokenize(content: &str) -> VecDeque<(usize, String)> {
    let mut tokens = VecDeque::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        if raw.trim_start().starts_with('/') {
            continue;
        }
        let code = match raw.find("//") {
            Some(pos) => &raw[..pos],
            None => raw,
        };

        let mut word = String::new();
        for ch in code.chars() {
            if ch.is_whitespace() || PUNCTUATION.contains(&ch) {
                if !word.is_empty() {
                    tokens.push_back((line, std::mem::take(&mut word)));
                }
                if !ch.is_whitespace() {
                    tokens.push_back((line, ch.to_string()));
                }
            } else {
                word.push(ch);
            }
        }
        if !word.is_empty() {
            tokens.push_back((line, word));
        }
    }

    tokens
}

/// POV scene parser.
pub struct PovParser {
    tokens: VecDeque<(usize, String)>,
    current_line: usize,
}

impl PovParser {
    /// Create a new parser from file contents.
    pub fn new(content: &str) -> Self {
        Self {
            tokens: tokenize(content),
            current_line: 0,
        }
    }

    /// Parse the content and return the top-level blocks in file order.
    pub fn parse(&mut self) -> ParseResult<Vec<PovBlock>> {
        let mut blocks = Vec::new();

        while let Some((line, keyword)) = self.tokens.pop_front() {
            self.current_line = line;
            let block = match keyword.as_str() {
                "camera" => PovBlock::Camera(self.parse_camera(line)?),
                "light_source" => PovBlock::LightSource(self.parse_light(line)?),
                "sphere" => PovBlock::Sphere(self.parse_sphere(line)?),
                "plane" => PovBlock::Plane(self.parse_plane(line)?),
                "triangle" => PovBlock::Triangle(self.parse_triangle(line)?),
                "{" | "}" | "<" | ">" | "," => {
                    return Err(ParseError::Parse {
                        line,
                        message: format!("Unexpected '{}' outside of a block", keyword),
                    });
                }
                _ if self.peek_is("{") => {
                    self.tokens.pop_front();
                    self.skip_block(line)?;
                    log::warn!("Skipping unsupported block '{}' at line {}", keyword, line);
                    PovBlock::Unknown(keyword)
                }
                _ => {
                    log::warn!("Ignoring stray token '{}' at line {}", keyword, line);
                    continue;
                }
            };
            blocks.push(block);
        }

        Ok(blocks)
    }

    /// Parse the body of a camera block.
    fn parse_camera(&mut self, start_line: usize) -> ParseResult<PovCamera> {
        self.expect("{")?;
        let mut camera = PovCamera::at_line(start_line);

        loop {
            let (line, key) = self.next_in_block(start_line)?;
            match key.as_str() {
                "location" => camera.location = self.parse_vec3()?,
                "up" => camera.up = self.parse_vec3()?,
                "right" => camera.right = self.parse_vec3()?,
                "look_at" => camera.look_at = self.parse_vec3()?,
                "}" => return Ok(camera),
                _ => self.skip_unknown("camera", &key, line, start_line)?,
            }
        }
    }

    /// Parse the body of a light_source block.
    fn parse_light(&mut self, start_line: usize) -> ParseResult<PovLight> {
        self.expect("{")?;
        let center = self.parse_vec3()?;
        self.eat(",");
        let mut color = Pigment::WHITE;

        loop {
            let (line, key) = self.next_in_block(start_line)?;
            match key.as_str() {
                "color" => color = self.parse_color()?,
                "}" => {
                    return Ok(PovLight {
                        line: start_line,
                        center,
                        color,
                    })
                }
                _ => self.skip_unknown("light_source", &key, line, start_line)?,
            }
        }
    }

    fn parse_sphere(&mut self, start_line: usize) -> ParseResult<PovSphere> {
        self.expect("{")?;
        let center = self.parse_vec3()?;
        self.eat(",");
        let radius = self.parse_number()?;
        let surface = self.parse_modifiers("sphere", start_line)?;

        Ok(PovSphere {
            line: start_line,
            center,
            radius,
            surface,
        })
    }

    fn parse_plane(&mut self, start_line: usize) -> ParseResult<PovPlane> {
        self.expect("{")?;
        let normal = self.parse_vec3()?;
        self.eat(",");
        let distance = self.parse_number()?;
        let surface = self.parse_modifiers("plane", start_line)?;

        Ok(PovPlane {
            line: start_line,
            normal,
            distance,
            surface,
        })
    }

    fn parse_triangle(&mut self, start_line: usize) -> ParseResult<PovTriangle> {
        self.expect("{")?;
        let a = self.parse_vec3()?;
        self.eat(",");
        let b = self.parse_vec3()?;
        self.eat(",");
        let c = self.parse_vec3()?;
        let surface = self.parse_modifiers("triangle", start_line)?;

        Ok(PovTriangle {
            line: start_line,
            vertices: [a, b, c],
            surface,
        })
    }

    /// Parse pigment/finish modifiers up to and including the shape's closing brace.
    fn parse_modifiers(&mut self, shape: &str, start_line: usize) -> ParseResult<PovSurface> {
        let mut surface = PovSurface::default();

        loop {
            let (line, key) = self.next_in_block(start_line)?;
            match key.as_str() {
                "pigment" => surface.pigment = self.parse_pigment(line)?,
                "finish" => surface.finish = self.parse_finish(line)?,
                "}" => return Ok(surface),
                _ => self.skip_unknown(shape, &key, line, start_line)?,
            }
        }
    }

    fn parse_pigment(&mut self, start_line: usize) -> ParseResult<Pigment> {
        self.expect("{")?;
        let mut pigment = Pigment::default();

        loop {
            let (line, key) = self.next_in_block(start_line)?;
            match key.as_str() {
                "color" => pigment = self.parse_color()?,
                "}" => return Ok(pigment),
                _ => self.skip_unknown("pigment", &key, line, start_line)?,
            }
        }
    }

    /// Parse a finish block. A key given twice keeps its last value.
    fn parse_finish(&mut self, start_line: usize) -> ParseResult<Finish> {
        self.expect("{")?;
        let mut finish = Finish::default();

        loop {
            let (line, key) = self.next_in_block(start_line)?;
            match key.as_str() {
                "ambient" => finish.ambient = self.parse_number()?,
                "diffuse" => finish.diffuse = self.parse_number()?,
                "specular" => finish.specular = self.parse_number()?,
                "roughness" => finish.roughness = self.parse_number()?,
                "reflection" => finish.reflect = self.parse_number()?,
                "refraction" => finish.refract = self.parse_number()?,
                "ior" => finish.ior = self.parse_number()?,
                "}" => return Ok(finish),
                _ => self.skip_unknown("finish", &key, line, start_line)?,
            }
        }
    }

    /// Parse `rgb <r, g, b>` or `rgbf <r, g, b, f>` after a `color` keyword.
    fn parse_color(&mut self) -> ParseResult<Pigment> {
        let line = self.peek_line();
        let channels = if self.eat("rgbf") {
            4
        } else {
            self.eat("rgb");
            3
        };
        let values = self.parse_components()?;

        match (channels, values.as_slice()) {
            (3, &[r, g, b]) => Ok(Pigment::rgb(r, g, b)),
            (4, &[r, g, b, f]) => Ok(Pigment::rgbf(r, g, b, f)),
            _ => Err(ParseError::Parse {
                line,
                message: format!(
                    "Expected {} color channels, found {}",
                    channels,
                    values.len()
                ),
            }),
        }
    }

    fn parse_vec3(&mut self) -> ParseResult<Vec3> {
        let line = self.peek_line();
        let values = self.parse_components()?;

        match values.as_slice() {
            &[x, y, z] => Ok(Vec3::new(x, y, z)),
            _ => Err(ParseError::Parse {
                line,
                message: format!("Expected 3 components, found {}", values.len()),
            }),
        }
    }

    /// Parse `< n, n, ... >`; commas between components are optional.
    fn parse_components(&mut self) -> ParseResult<Vec<f32>> {
        self.expect("<")?;
        let mut values = Vec::new();

        loop {
            if self.eat(">") {
                return Ok(values);
            }
            if !values.is_empty() {
                self.eat(",");
            }
            values.push(self.parse_number()?);
        }
    }

    fn parse_number(&mut self) -> ParseResult<f32> {
        let (line, token) = self.next()?;
        token
            .parse::<f32>()
            .map_err(|_| ParseError::InvalidNumber { line, token })
    }

    /// Warn about and consume an unrecognised key together with its value.
    fn skip_unknown(
        &mut self,
        context: &str,
        key: &str,
        line: usize,
        start_line: usize,
    ) -> ParseResult<()> {
        log::warn!("Skipping unknown {} key '{}' at line {}", context, key, line);

        if self.eat("{") {
            return self.skip_block(line);
        }
        if self.peek_is("<") {
            // Vector-valued key: drop everything up to the closing '>'.
            loop {
                let (_, token) = self.next_in_block(start_line)?;
                if token == ">" {
                    return Ok(());
                }
            }
        }
        match self.tokens.front() {
            Some((_, token)) if token.parse::<f32>().is_ok() => {
                self.tokens.pop_front();
            }
            _ => {}
        }
        Ok(())
    }

    /// Skip a block (consume until the matching closing brace).
    fn skip_block(&mut self, start_line: usize) -> ParseResult<()> {
        let mut depth = 1;

        while depth > 0 {
            match self.tokens.pop_front() {
                Some((line, token)) => {
                    self.current_line = line;
                    match token.as_str() {
                        "{" => depth += 1,
                        "}" => depth -= 1,
                        _ => {}
                    }
                }
                None => return Err(ParseError::UnclosedBlock(start_line)),
            }
        }

        Ok(())
    }

    fn next(&mut self) -> ParseResult<(usize, String)> {
        let (line, token) = self.tokens.pop_front().ok_or(ParseError::UnexpectedEof)?;
        self.current_line = line;
        Ok((line, token))
    }

    /// Like `next`, but running out of input means the block was never closed.
    fn next_in_block(&mut self, start_line: usize) -> ParseResult<(usize, String)> {
        match self.next() {
            Err(ParseError::UnexpectedEof) => Err(ParseError::UnclosedBlock(start_line)),
            other => other,
        }
    }

    fn expect(&mut self, expected: &str) -> ParseResult<()> {
        let (line, token) = self.next()?;
        if token == expected {
            Ok(())
        } else {
            Err(ParseError::Parse {
                line,
                message: format!("Expected '{}', found '{}'", expected, token),
            })
        }
    }

    fn peek_is(&self, expected: &str) -> bool {
        self.tokens
            .front()
            .map_or(false, |(_, token)| token == expected)
    }

    fn peek_line(&self) -> usize {
        self.tokens
            .front()
            .map_or(self.current_line, |(line, _)| *line)
    }

    /// Consume the next token if it matches.
    fn eat(&mut self, expected: &str) -> bool {
        if self.peek_is(expected) {
            self.tokens.pop_front();
            true
        } else {
            false
        }
    }
}

/// Parse a POV string and return its top-level blocks.
pub fn parse_pov(content: &str) -> ParseResult<Vec<PovBlock>> {
    let mut parser = PovParser::new(content);
    parser.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_REFLECT: &str = r#"
// simple reflection
camera {
  location  <0, 0, 14>
  up        <0,  1,  0>
  right     <1.33333, 0,  0>
  look_at   <0, 0, 0>
}

light_source {<-100, 100, 100> color rgb <1.5, 1.5, 1.5>}

sphere { <0, 0, 0>, 2
  pigment { color rgb <1.0, 0.0, 1.0>}
  finish {ambient 0.2 diffuse 0.4 specular 0.5 roughness 0.05 reflection 0.5}
}

plane {<0, 1, 0>, -4
  pigment {color rgb <0.2, 0.2, 0.8>}
  finish {ambient 0.4 diffuse 0.8 reflection 0.5}
}

triangle {
  <-5,-4,-2>,
  <5,-4,-2>,
  <0, 5, -2>
  pigment {color rgbf <0.9, 0.9, 0.9, 0.6>}
  finish {ambient 0.3 diffuse 0.4 refraction 1.0 ior 1.33}
}
"#;

    #[test]
    fn test_tokenize_splits_punctuation() {
        let tokens: Vec<String> = tokenize("sphere{<1,-2 ,3>,0.5}")
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(
            tokens,
            vec!["sphere", "{", "<", "1", ",", "-2", ",", "3", ">", ",", "0.5", "}"]
        );
    }

    #[test]
    fn test_tokenize_drops_comments() {
        let tokens = tokenize("/ header\n// note\nplane // trailing\n{ }");
        let words: Vec<_> = tokens.iter().map(|(l, t)| (*l, t.as_str())).collect();
        assert_eq!(words, vec![(3, "plane"), (4, "{"), (4, "}")]);
    }

    #[test]
    fn test_parse_full_scene() {
        let blocks = parse_pov(SIMPLE_REFLECT).unwrap();
        assert_eq!(blocks.len(), 5);

        if let PovBlock::Camera(camera) = &blocks[0] {
            assert_eq!(camera.line, 3);
            assert_eq!(camera.location, Vec3::new(0.0, 0.0, 14.0));
            assert_eq!(camera.right, Vec3::new(1.33333, 0.0, 0.0));
        } else {
            panic!("Expected camera block");
        }

        if let PovBlock::LightSource(light) = &blocks[1] {
            assert_eq!(light.center, Vec3::new(-100.0, 100.0, 100.0));
            assert_eq!(light.color, Pigment::rgb(1.5, 1.5, 1.5));
        } else {
            panic!("Expected light_source block");
        }

        if let PovBlock::Sphere(sphere) = &blocks[2] {
            assert_eq!(sphere.radius, 2.0);
            assert_eq!(sphere.surface.pigment, Pigment::rgb(1.0, 0.0, 1.0));
            assert_eq!(sphere.surface.finish.roughness, 0.05);
            assert_eq!(sphere.surface.finish.reflect, 0.5);
        } else {
            panic!("Expected sphere block");
        }

        if let PovBlock::Plane(plane) = &blocks[3] {
            assert_eq!(plane.normal, Vec3::Y);
            assert_eq!(plane.distance, -4.0);
            // Unset finish keys keep their defaults.
            assert_eq!(plane.surface.finish.specular, 0.0);
            assert_eq!(plane.surface.finish.roughness, 1.0);
        } else {
            panic!("Expected plane block");
        }

        if let PovBlock::Triangle(triangle) = &blocks[4] {
            assert_eq!(triangle.vertices[0], Vec3::new(-5.0, -4.0, -2.0));
            assert_eq!(triangle.vertices[2], Vec3::new(0.0, 5.0, -2.0));
            assert_eq!(triangle.surface.pigment.f, 0.6);
            assert_eq!(triangle.surface.finish.refract, 1.0);
            assert_eq!(triangle.surface.finish.ior, 1.33);
        } else {
            panic!("Expected triangle block");
        }
    }

    #[test]
    fn test_camera_defaults_for_missing_keys() {
        let blocks = parse_pov("camera { location <1, 2, 3> }").unwrap();
        let PovBlock::Camera(camera) = &blocks[0] else {
            panic!("Expected camera block");
        };
        assert_eq!(camera.location, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.up, Vec3::Y);
        assert_eq!(camera.look_at, Vec3::NEG_Z);
    }

    #[test]
    fn test_finish_last_key_wins() {
        let blocks =
            parse_pov("sphere { <0,0,0>, 1 finish { ambient 0.2 ambient 0.0 diffuse 0.3 } }")
                .unwrap();
        let PovBlock::Sphere(sphere) = &blocks[0] else {
            panic!("Expected sphere block");
        };
        assert_eq!(sphere.surface.finish.ambient, 0.0);
        assert_eq!(sphere.surface.finish.diffuse, 0.3);
    }

    #[test]
    fn test_unknown_blocks_and_keys_are_skipped() {
        let content = r#"
global_settings { assumed_gamma 1.0 }
box { <0, 0, 0>, <1, 1, 1> pigment { color rgb <1, 0, 0> } }
sphere { <0, 0, 0>, 1
  pigment { color rgb <1, 1, 1> }
  finish { phong 0.9 ambient 0.1 }
  no_shadow
  translate <1, 2, 3>
}
"#;
        let blocks = parse_pov(content).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], PovBlock::Unknown("global_settings".to_string()));
        assert_eq!(blocks[1], PovBlock::Unknown("box".to_string()));

        let PovBlock::Sphere(sphere) = &blocks[2] else {
            panic!("Expected sphere block");
        };
        assert_eq!(sphere.surface.finish.ambient, 0.1);
        assert_eq!(sphere.center, Vec3::ZERO);
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_pov("sphere {\n <0, 0, 0>, big }").unwrap_err();
        match err {
            ParseError::InvalidNumber { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "big");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse_pov("\nplane { <0, 1, 0>, -4\n pigment { color rgb <1, 1, 1> }\n")
            .unwrap_err();
        assert!(matches!(err, ParseError::UnclosedBlock(2)));
    }

    #[test]
    fn test_wrong_component_count() {
        let err = parse_pov("light_source { <1, 2> color rgb <1, 1, 1> }").unwrap_err();
        assert!(matches!(err, ParseError::Parse { line: 1, .. }));

        let err = parse_pov("light_source { <1, 2, 3> color rgbf <1, 1, 1> }").unwrap_err();
        assert!(matches!(err, ParseError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_truncated_vector() {
        let err = parse_pov("sphere { <0, 0").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof));
    }
}
