//! The interactive wish-granting protocol.
//!
//! A session runs a menu loop over a line-oriented text stream:
//!
//! 1. **Provision**: pick a curve, draw a random `x` in `[1, p)`, derive a
//!    candidate `y` and remember `SHA-384(x ‖ y)`. The point is printed.
//! 2. **Wish**: supply a message, the provisioned point and an ECDSA
//!    signature. A valid signature over [`WISH_PHRASE`] reveals the
//!    configured secret.
//!
//! Only one commitment is held at a time; provisioning again replaces it.

use crate::{Commitment, Config, Error, Result, prompt::Prompt};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::ToPrimitive;
use rand_core::{CryptoRng, RngCore};
use std::io::{BufRead, Write};
use weierstrass::{Curve, Modulus, Point, Signature, curves};

/// The message whose valid signature releases the secret.
pub const WISH_PHRASE: &[u8] = b"I really wanna flag";

const WELCOME: &str = "Welcome to curveball.";
const ACTION_PROMPT: &str = "Choose action:\n  1. Provision public-key.\n  2. Make a wish.\n > ";
const CURVE_PROMPT: &str = "Curve choice > ";

/// Commitment state of a session.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum State {
    /// No public key has been provisioned yet.
    #[default]
    Unprovisioned,

    /// Commitment to the most recently provisioned public key.
    Provisioned(Commitment),
}

/// Curves offered by the session menu.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CurveChoice {
    /// NIST P-384, selector `1`.
    NistP384,

    /// brainpoolP384r1, selector `2`.
    BrainpoolP384r1,
}

impl CurveChoice {
    /// All choices in menu order.
    pub const ALL: [Self; 2] = [Self::NistP384, Self::BrainpoolP384r1];

    /// Map a menu selector to a curve.
    pub fn from_selector(selector: &BigInt) -> Result<Self> {
        match selector.to_u8() {
            Some(1) => Ok(Self::NistP384),
            Some(2) => Ok(Self::BrainpoolP384r1),
            _ => Err(Error::InvalidSelector(selector.clone())),
        }
    }

    /// Menu selector for this curve.
    pub fn selector(self) -> u8 {
        match self {
            Self::NistP384 => 1,
            Self::BrainpoolP384r1 => 2,
        }
    }

    /// The curve itself.
    pub fn curve(self) -> &'static Curve {
        match self {
            Self::NistP384 => curves::nist_p384(),
            Self::BrainpoolP384r1 => curves::brainpool_p384r1(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Action {
    Provision,
    Wish,
}

impl Action {
    fn from_selector(selector: &BigInt) -> Option<Self> {
        match selector.to_u8() {
            Some(1) => Some(Self::Provision),
            Some(2) => Some(Self::Wish),
            _ => None,
        }
    }
}

/// How a wish that passed the commitment check ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WishOutcome {
    /// Valid signature over [`WISH_PHRASE`]: the secret was revealed.
    Granted,

    /// Valid signature over some other message.
    Verified,

    /// The signature did not verify.
    Denied,
}

/// One client session.
#[derive(Debug)]
pub struct Session<'a, R, W, G> {
    config: &'a Config,
    prompt: Prompt<R, W>,
    rng: G,
    state: State,
}

impl<'a, R, W, G> Session<'a, R, W, G>
where
    R: BufRead,
    W: Write,
    G: RngCore + CryptoRng,
{
    /// New unprovisioned session talking over `input` and `output`.
    pub fn new(config: &'a Config, input: R, output: W, rng: G) -> Self {
        Self {
            config,
            prompt: Prompt::new(input, output),
            rng,
            state: State::Unprovisioned,
        }
    }

    /// Current commitment state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Greet the client and serve menu actions until an error ends the
    /// session.
    ///
    /// Never returns `Ok`: running out of input surfaces as [`Error::Eof`].
    /// Wishing before provisioning is reported inline and the loop goes on.
    pub fn run(&mut self) -> Result<()> {
        self.prompt.say(WELCOME)?;

        loop {
            match self.step() {
                Ok(()) => {}
                Err(err) if err.is_recoverable() => self.prompt.say("Not provisioned!")?,
                Err(err) => return Err(err),
            }
        }
    }

    /// Show the action menu once and perform the chosen action.
    ///
    /// Unknown selectors print `Wot?` and succeed.
    pub fn step(&mut self) -> Result<()> {
        let selector = self.prompt.ask_int(ACTION_PROMPT, 10)?;

        match Action::from_selector(&selector) {
            Some(Action::Provision) => {
                self.provision()?;
            }
            Some(Action::Wish) => {
                self.wish()?;
            }
            None => self.prompt.say("Wot?")?,
        }

        Ok(())
    }

    /// Provision a fresh public key on a curve chosen by the client.
    ///
    /// The printed `y` is only a candidate square root: when `x³ + ax + b`
    /// is a non-residue the point is off the curve. The commitment replaces
    /// any earlier one only after a valid curve has been chosen.
    pub fn provision(&mut self) -> Result<Point> {
        let curve = self.choose_curve()?.curve();
        self.prompt.say("Provisioning public-key from the chosen curve.")?;

        let x = curve.modulus().random_nonzero(&mut self.rng);
        let y = curve.lift_x_unchecked(&x);
        self.state = State::Provisioned(Commitment::new(&x, &y));

        self.prompt.say(format_args!("\tx: {x:096X}"))?;
        self.prompt.say(format_args!("\ty: {y:096X}"))?;
        self.prompt.say("Ready.")?;

        Ok(Point::new(x, y))
    }

    /// Check a signed wish against the provisioned commitment.
    ///
    /// The curve is chosen again here and need not be the one used when
    /// provisioning. A public key that doesn't match the commitment fails
    /// with [`Error::CommitmentMismatch`] before any signature is read.
    pub fn wish(&mut self) -> Result<WishOutcome> {
        let State::Provisioned(commitment) = self.state else {
            return Err(Error::NotProvisioned);
        };

        let message = self.prompt.ask("What is your wish? ")?.as_bytes().to_vec();

        self.prompt.say("Provide PK to verify your wish.")?;
        let curve = self.choose_curve()?.curve();
        let x = self.ask_bounded("x", curve.modulus())?;
        let y = self.ask_bounded("y", curve.modulus())?;

        if Commitment::new(&x, &y) != commitment {
            return Err(Error::CommitmentMismatch);
        }

        self.prompt.say("Provide signature to verify your wish.")?;
        let r = self.ask_bounded("R", curve.order())?;
        let s = self.ask_bounded("S", curve.order())?;

        if !curve.verify(&Point::new(x, y), &Signature::new(r, s), &message)? {
            self.prompt.say("Wish denied!")?;
            return Ok(WishOutcome::Denied);
        }

        self.prompt.say("Wish verified!")?;
        if message == WISH_PHRASE {
            let secret = self.config.secret();
            self.prompt.say(format_args!("Alright! Alright! {secret}"))?;
            Ok(WishOutcome::Granted)
        } else {
            self.prompt.say("Why are you here?")?;
            Ok(WishOutcome::Verified)
        }
    }

    /// Print the one-line report for an error that ended the session.
    pub fn report(&mut self, err: &Error) -> Result<()> {
        self.prompt.say(format_args!("Error {err}"))
    }

    /// Tear the session down into its streams.
    pub fn into_inner(self) -> (R, W) {
        self.prompt.into_inner()
    }

    fn choose_curve(&mut self) -> Result<CurveChoice> {
        self.prompt.say("Curves:")?;
        for choice in CurveChoice::ALL {
            self.prompt
                .say(format_args!("  {}. {}.", choice.selector(), choice.curve().name()))?;
        }

        let selector = self.prompt.ask_int(CURVE_PROMPT, 10)?;
        CurveChoice::from_selector(&selector)
    }

    /// Read a hex integer and check it lies in `[0, bound)`.
    fn ask_bounded(&mut self, param: &'static str, bound: &Modulus) -> Result<BigUint> {
        let value = self.prompt.ask_int(&format!("{param}> "), 16)?;

        match value.sign() {
            Sign::Minus => Err(Error::OutOfRange { param, value }),
            _ if !bound.contains(value.magnitude()) => Err(Error::OutOfRange { param, value }),
            _ => Ok(value.magnitude().clone()),
        }
    }
}
