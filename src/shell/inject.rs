//! Chrome script injected into every content document.
//!
//! Provides what the hosted pages cannot: a touch-friendly exit control,
//! kiosk keyboard shortcuts, routing of `target="_blank"` activations back
//! to the shell, and the page-ready signal the fragment protocol relies on.

/// Injected before any document script runs.
pub const CHROME_SCRIPT: &str = r#"
(function () {
  if (window.__KIOSK_CHROME__) return;
  window.__KIOSK_CHROME__ = true;

  function invoke(cmd, args) {
    if (window.__TAURI__ && window.__TAURI__.invoke) {
      return window.__TAURI__.invoke(cmd, args || {});
    }
    return Promise.resolve();
  }

  document.addEventListener("keydown", function (e) {
    if (e.key === "F11") {
      e.preventDefault();
      invoke("set_fullscreen");
    } else if (e.key === "Escape") {
      invoke("set_fullscreen", { enabled: false });
    } else if (e.key === "F5") {
      e.preventDefault();
      window.location.reload();
    }
  });

  // Route new-window requests through the shell; the kiosk never opens a
  // second surface.
  document.addEventListener(
    "click",
    function (e) {
      var anchor = e.target && e.target.closest ? e.target.closest("a[target=_blank]") : null;
      if (anchor && anchor.href) {
        e.preventDefault();
        e.stopPropagation();
        invoke("open_target", { url: anchor.href });
      }
    },
    true
  );

  function createExitButton() {
    if (document.getElementById("kiosk-exit-container")) return;
    if (!document.body) {
      setTimeout(createExitButton, 100);
      return;
    }

    var container = document.createElement("div");
    container.id = "kiosk-exit-container";
    container.style.cssText =
      "position:fixed;top:10px;right:10px;z-index:999999;opacity:0.3;transition:opacity 0.3s ease;";

    var button = document.createElement("div");
    button.id = "kiosk-exit-button";
    button.title = "Exit Application";
    button.textContent = "×";
    button.style.cssText =
      "width:50px;height:50px;background:rgba(220,53,69,0.9);border:2px solid rgba(255,255,255,0.8);" +
      "border-radius:50%;cursor:pointer;display:flex;align-items:center;justify-content:center;" +
      "font-size:28px;color:white;font-weight:bold;box-shadow:0 2px 10px rgba(0,0,0,0.3);" +
      "transition:all 0.2s ease;user-select:none;";

    button.addEventListener("mouseenter", function () {
      button.style.background = "rgba(220,53,69,1)";
      button.style.transform = "scale(1.1)";
      container.style.opacity = "1";
    });
    button.addEventListener("mouseleave", function () {
      button.style.background = "rgba(220,53,69,0.9)";
      button.style.transform = "scale(1)";
      container.style.opacity = "0.3";
    });
    button.addEventListener("click", function () {
      invoke("exit_kiosk");
    });

    container.appendChild(button);
    document.body.appendChild(container);

    var hideTimeout;
    function showButton() {
      container.style.opacity = "1";
      clearTimeout(hideTimeout);
      hideTimeout = setTimeout(function () {
        container.style.opacity = "0.3";
      }, 3000);
    }
    document.addEventListener("mousemove", showButton);
    document.addEventListener("touchstart", showButton);

    // Larger target on touch devices
    if (window.matchMedia && window.matchMedia("(pointer: coarse)").matches) {
      button.style.width = "60px";
      button.style.height = "60px";
      button.style.fontSize = "32px";
      container.style.opacity = "0.5";
    }
  }

  window.addEventListener("DOMContentLoaded", function () {
    invoke("page_ready");
    createExitButton();
  });
})();
"#;
